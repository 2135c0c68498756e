//! Dashboard main renderer

use super::components::{footer, header, logs, summary_card, trend_chart, user_panel};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(main_chunks[1]);

    user_panel::render_user_panel(f, content_chunks[0], state);

    // Summary panels are hidden until a summary is loaded, and while an error is shown
    if let Some(summary) = state.summary() {
        let summary_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(content_chunks[1]);

        summary_card::render_summary_card(
            f,
            summary_chunks[0],
            summary.latest_lab.as_ref(),
            &summary.last_30_days,
        );
        trend_chart::render_trend_chart(f, summary_chunks[1], &summary.trend_last5);
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::error_classifier::LogLevel;
    use crate::models::{LabResult, LifestyleAverages, Summary};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::{Command, DashboardEvent};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn mounted_state() -> (DashboardState, Command) {
        let mut state = DashboardState::new(Environment::Local, UIConfig::new(true));
        let commands = state.apply(DashboardEvent::Mounted);
        (state, commands[1].clone())
    }

    fn lab(date: &str, ldl: f64) -> LabResult {
        LabResult {
            test_date: date.to_string(),
            ldl: Some(ldl),
            hdl: Some(45.0),
            total_cholesterol: Some(200.0),
        }
    }

    #[test]
    fn test_loaded_summary_shows_both_panels() {
        let (mut state, command) = mounted_state();
        let Command::LoadSummary(tag) = command else {
            panic!("expected summary request");
        };
        state.apply(DashboardEvent::SummaryLoaded {
            tag,
            summary: Summary {
                user_id: Some(1),
                latest_lab: Some(lab("2024-05-01", 130.0)),
                last_30_days: LifestyleAverages {
                    avg_diet_score: Some(7.0),
                    avg_exercise_minutes: Some(30.0),
                    avg_sleep_hours: Some(6.5),
                    entries_count: Some(12),
                },
                trend_last5: vec![lab("2024-04-01", 140.0), lab("2024-05-01", 130.0)],
            },
        });

        let screen = render(&state);
        assert!(screen.contains("LDL: 130"));
        assert!(screen.contains("LDL Trend"));
        assert!(screen.contains("Showing user 1"));
    }

    #[test]
    fn test_error_shows_generic_banner_and_hides_panels() {
        let (mut state, command) = mounted_state();
        let Command::LoadSummary(tag) = command else {
            panic!("expected summary request");
        };
        state.apply(DashboardEvent::SummaryFailed {
            tag,
            message: "user not found".to_string(),
            log_level: LogLevel::Info,
        });

        let screen = render(&state);
        assert!(screen.contains(header::ERROR_BANNER_TEXT));
        assert!(!screen.contains("SUMMARY"));
        assert!(!screen.contains("LDL Trend"));
        // The detail only appears in the activity log
        assert!(screen.contains("User 1: user not found"));
    }

    #[test]
    fn test_loading_shows_fallback_selector() {
        let (state, _) = mounted_state();
        let screen = render(&state);
        assert!(screen.contains(header::LOADING_TEXT));
        assert!(screen.contains("User ID: 1"));
    }
}
