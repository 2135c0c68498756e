//! LDL trend chart component

use super::super::utils::{format_month_day, format_value};
use crate::models::LabResult;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{
    Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Padding, Paragraph,
};

pub const NO_TREND_TEXT: &str = "No trend data available.";

/// One plotted lab draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: String,
    pub ldl: Option<f64>,
}

impl TrendPoint {
    /// Axis label, `MM-DD`.
    pub fn label(&self) -> String {
        format_month_day(&self.date)
    }
}

/// Reduce lab results to (date, LDL) points, keeping input order.
pub fn trend_points(trend: &[LabResult]) -> Vec<TrendPoint> {
    trend
        .iter()
        .map(|lab| TrendPoint {
            date: lab.test_date.clone(),
            ldl: lab.ldl,
        })
        .collect()
}

/// Chart coordinates: x is the point's position, points without LDL are skipped.
pub fn chart_data(points: &[TrendPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.ldl.map(|ldl| (i as f64, ldl)))
        .collect()
}

/// Y-axis bounds padded around the plotted values.
fn y_bounds(data: &[(f64, f64)]) -> [f64; 2] {
    let min = data.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let max = data.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 200.0];
    }
    [(min - 10.0).max(0.0).floor(), (max + 10.0).ceil()]
}

/// Text rendering of the trend for headless output.
pub fn trend_text(points: &[TrendPoint]) -> Vec<String> {
    if points.is_empty() {
        return vec![NO_TREND_TEXT.to_string()];
    }
    points
        .iter()
        .map(|p| format!("{}  LDL {} mg/dL", p.label(), format_value(p.ldl)))
        .collect()
}

/// Render the LDL trend chart, or a placeholder when there is no data.
pub fn render_trend_chart(f: &mut Frame, area: ratatui::layout::Rect, trend: &[LabResult]) {
    let block = Block::default()
        .title("LDL Trend")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let points = trend_points(trend);
    if points.is_empty() {
        let placeholder = Paragraph::new(NO_TREND_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let data = chart_data(&points);
    let [y_min, y_max] = y_bounds(&data);
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let dataset = Dataset::default()
        .name("LDL")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightMagenta))
        .data(&data);

    let x_labels: Vec<Span> = points
        .iter()
        .map(|p| Span::styled(p.label(), Style::default().fg(Color::Gray)))
        .collect();
    let y_labels = vec![
        Span::styled(format!("{:.0}", y_min), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.0}", (y_min + y_max) / 2.0),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!("{:.0}", y_max), Style::default().fg(Color::Gray)),
    ];

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    "LDL (mg/dL)",
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}
