//! Summary card component
//!
//! Latest lab result and the 30-day lifestyle averages

use super::super::utils::format_value;
use crate::models::{LabResult, LifestyleAverages};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub const NO_RESULTS_TEXT: &str = "No lab results found for this user.";

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Lines of the summary card. `last30` is ignored when there is no lab result.
pub fn summary_lines(latest: Option<&LabResult>, last30: &LifestyleAverages) -> Vec<Line<'static>> {
    let Some(latest) = latest else {
        return vec![Line::from(Span::styled(
            NO_RESULTS_TEXT,
            Style::default().fg(Color::DarkGray),
        ))];
    };

    vec![
        heading("Latest Lab Result"),
        field("Test Date", latest.test_date.clone()),
        field("LDL", format_value(latest.ldl)),
        field("HDL", format_value(latest.hdl)),
        field("Total Cholesterol", format_value(latest.total_cholesterol)),
        Line::from(""),
        heading("Last 30 days (averages)"),
        field("Diet score", format_value(last30.avg_diet_score)),
        field("Exercise (min)", format_value(last30.avg_exercise_minutes)),
        field("Sleep (hrs)", format_value(last30.avg_sleep_hours)),
        field("Entries", last30.entries_count.unwrap_or(0).to_string()),
    ]
}

/// Render the summary card.
pub fn render_summary_card(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    latest: Option<&LabResult>,
    last30: &LifestyleAverages,
) {
    let block = Block::default()
        .title("SUMMARY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(summary_lines(latest, last30))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::utils::line_text;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    fn averages() -> LifestyleAverages {
        LifestyleAverages {
            avg_diet_score: Some(7.0),
            avg_exercise_minutes: Some(30.0),
            avg_sleep_hours: Some(6.5),
            entries_count: Some(12),
        }
    }

    #[test]
    fn test_no_lab_result_ignores_averages() {
        let lines = texts(&summary_lines(None, &averages()));
        assert_eq!(lines, vec![NO_RESULTS_TEXT.to_string()]);
    }

    #[test]
    fn test_full_summary() {
        let lab = LabResult {
            test_date: "2024-05-01".to_string(),
            ldl: Some(130.0),
            hdl: Some(45.0),
            total_cholesterol: Some(200.0),
        };
        let lines = texts(&summary_lines(Some(&lab), &averages()));

        assert!(lines.contains(&"Test Date: 2024-05-01".to_string()));
        assert!(lines.contains(&"LDL: 130".to_string()));
        assert!(lines.contains(&"Sleep (hrs): 6.5".to_string()));
        assert!(lines.contains(&"Entries: 12".to_string()));
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let lab = LabResult {
            test_date: "2024-05-01".to_string(),
            ldl: None,
            hdl: Some(45.0),
            total_cholesterol: Some(200.0),
        };
        let lines = texts(&summary_lines(Some(&lab), &LifestyleAverages::default()));

        assert!(lines.contains(&"LDL: -".to_string()));
        assert!(lines.contains(&"HDL: 45".to_string()));
        assert!(lines.contains(&"Total Cholesterol: 200".to_string()));
        assert!(lines.contains(&"Diet score: -".to_string()));
        assert!(lines.contains(&"Entries: 0".to_string()));
    }
}
