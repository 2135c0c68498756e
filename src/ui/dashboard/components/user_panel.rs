//! Dashboard user panel component
//!
//! Renders the user selector and connection info

use super::super::state::DashboardState;
use crate::environment::Environment;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Label of the selected user. The bare id when the list has no entry for it.
pub fn selected_label(state: &DashboardState) -> String {
    match state.selected_user() {
        Some(user) => user.display_label(),
        None => state.selected_user_id().to_string(),
    }
}

/// Render user selector and connection info.
pub fn render_user_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = vec![Line::from(vec![
        Span::styled("User ID: ", Style::default().fg(Color::Gray)),
        Span::styled(
            selected_label(state),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    // Other users, current one marked
    for user in state.users() {
        let (marker, style) = if user.id == state.selected_user_id() {
            ("> ", Style::default().fg(Color::LightYellow))
        } else {
            ("  ", Style::default().fg(Color::White))
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, user.display_label()),
            style,
        )));
    }

    lines.push(Line::from(""));

    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    lines.push(Line::from(Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )));
    lines.push(Line::from(Span::styled(
        format!("API: {}", state.environment.api_url()),
        Style::default().fg(Color::LightBlue),
    )));

    let block = Block::default()
        .title("USERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
