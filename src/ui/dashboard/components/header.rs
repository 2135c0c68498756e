//! Dashboard header component
//!
//! Renders the title and the load status gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Shown instead of the error message when a summary read fails.
pub const ERROR_BANNER_TEXT: &str = "Error";

pub const LOADING_TEXT: &str = "Loading...";

/// Status text for the current state, if any.
pub fn status_text(state: &DashboardState) -> Option<&'static str> {
    if state.is_loading() {
        Some(LOADING_TEXT)
    } else if state.error().is_some() {
        Some(ERROR_BANNER_TEXT)
    } else {
        None
    }
}

/// Render header with title and load status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("LIPITRACK DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let status_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    if state.is_loading() {
        // Animated gauge - loops every 20 ticks
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        let gauge = Gauge::default()
            .block(status_block)
            .gauge_style(
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            )
            .percent(progress)
            .label(LOADING_TEXT);
        f.render_widget(gauge, header_chunks[1]);
        return;
    }

    let (text, color) = match status_text(state) {
        Some(text) => (text.to_string(), Color::LightRed),
        None => (
            format!("Showing user {}", state.selected_user_id()),
            Color::LightGreen,
        ),
    };
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(status_block);
    f.render_widget(status, header_chunks[1]);
}
