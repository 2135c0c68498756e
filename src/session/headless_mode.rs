//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::ui::dashboard::DashboardState;
use crate::ui::dashboard::components::header::status_text;
use crate::ui::dashboard::components::summary_card::summary_lines;
use crate::ui::dashboard::components::trend_chart::{trend_points, trend_text};
use crate::ui::dashboard::components::user_panel::selected_label;
use crate::ui::dashboard::utils::line_text;
use std::error::Error;

/// Runs the dashboard once without a terminal UI
///
/// Loads the user list and the initial summary, waits for every read to
/// finish, then prints the activity log and the views as plain text.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    session.controller.initialize();
    session.controller.run_until_idle().await;

    let state = session.controller.state();
    for event in state.activity_logs().iter().filter(|e| e.should_display()) {
        println!("{}", event);
    }
    for line in headless_report(state) {
        println!("{}", line);
    }

    print_session_exit_success();
    Ok(())
}

/// Plain-text rendering of the dashboard.
pub fn headless_report(state: &DashboardState) -> Vec<String> {
    let mut lines = vec![format!("User ID: {}", selected_label(state))];

    if let Some(status) = status_text(state) {
        lines.push(status.to_string());
    }

    if let Some(summary) = state.summary() {
        lines.push(String::new());
        lines.extend(
            summary_lines(summary.latest_lab.as_ref(), &summary.last_30_days)
                .iter()
                .map(line_text),
        );
        lines.push(String::new());
        lines.push("LDL Trend".to_string());
        lines.extend(trend_text(&trend_points(&summary.trend_last5)));
    }

    lines
}
