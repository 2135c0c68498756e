//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::Color;
use ratatui::text::Line;

/// Placeholder for absent numeric values.
pub const MISSING_VALUE: &str = "-";

/// Get a ratatui color for an activity log source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::UserList => Color::Cyan,
        Source::Summary => Color::Yellow,
        Source::Dashboard => Color::Green,
    }
}

/// Format an optional measurement, `-` when absent.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING_VALUE.to_string(),
    }
}

/// Shorten a `YYYY-MM-DD` date to `MM-DD`
pub fn format_month_day(date: &str) -> String {
    match date.get(5..) {
        Some(month_day) if !month_day.is_empty() => month_day.to_string(),
        _ => date.to_string(),
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM:SS from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min_sec) = time_part.get(0..8) {
                    return format!("{} {}", month_day, hour_min_sec);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Plain text of a styled line, for headless output and tests
pub fn line_text(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
