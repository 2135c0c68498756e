//! Main application state and UI loop
//!
//! Contains the App struct and key handling

use crate::consts::cli_consts::ui::{poll_interval, splash_duration};
use crate::controller::DashboardController;
use crate::ui::dashboard::render_dashboard;
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;

/// UI configuration data
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard with the selected user's lab summary.
    Dashboard,
}

/// Keys the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Refresh,
    NextUser,
    PreviousUser,
    Ignore,
}

impl KeyAction {
    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Refresh,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::NextUser,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::PreviousUser,
            _ => KeyAction::Ignore,
        }
    }
}

/// Application state
pub struct App {
    /// Drives the dashboard state and its reads.
    controller: DashboardController,

    /// The current screen being displayed in the application.
    current_screen: Screen,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(controller: DashboardController) -> Self {
        Self {
            controller,
            current_screen: Screen::Splash,
        }
    }

    /// Switch to the dashboard, which mounts it and starts loading data.
    fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
        self.controller.initialize();
    }

    /// Handle a key press. Returns false when the application should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let action = KeyAction::from_key(code);
        if action == KeyAction::Quit {
            return false;
        }

        match self.current_screen {
            // Any other key skips the splash screen
            Screen::Splash => self.show_dashboard(),
            Screen::Dashboard => match action {
                KeyAction::Refresh => self.controller.refresh(),
                KeyAction::NextUser => self.controller.select_next(),
                KeyAction::PreviousUser => self.controller.select_previous(),
                KeyAction::Quit | KeyAction::Ignore => {}
            },
        }
        true
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        // Apply fetch results that arrived since the last frame
        app.controller.drain_results();

        if app.current_screen == Screen::Dashboard {
            app.controller.tick();
        }
        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            app.show_dashboard();
            continue;
        }

        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, app.controller.state()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyAction::from_key(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(KeyAction::from_key(KeyCode::Esc), KeyAction::Quit);
        assert_eq!(KeyAction::from_key(KeyCode::Char('R')), KeyAction::Refresh);
        assert_eq!(KeyAction::from_key(KeyCode::Down), KeyAction::NextUser);
        assert_eq!(KeyAction::from_key(KeyCode::Char('k')), KeyAction::PreviousUser);
        assert_eq!(KeyAction::from_key(KeyCode::Enter), KeyAction::Ignore);
    }
}
