//! Daily totals line chart

use super::super::utils::truncate_label;
use crate::charts::ChartSeries;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

/// Points for the dataset, one per day, x starting at 0.
pub fn points(series: &ChartSeries) -> Vec<(f64, f64)> {
    series
        .values()
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v as f64))
        .collect()
}

pub fn render_trend(f: &mut Frame, area: Rect, title: &str, series: Option<&ChartSeries>) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta));

    let Some(series) = series.filter(|s| !s.is_empty()) else {
        let text = if series.is_some() { "No data" } else { "Loading..." };
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let data = points(series);
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let y_max = series.max_value().max(1) as f64;

    let labels = series.labels();
    let x_labels: Vec<Span> = match (labels.first(), labels.last()) {
        (Some(first), Some(last)) if labels.len() > 1 => {
            vec![Span::raw(truncate_label(first)), Span::raw(truncate_label(last))]
        }
        (Some(only), _) => vec![Span::raw(truncate_label(only))],
        _ => Vec::new(),
    };
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{}", (y_max / 2.0).round() as u64)),
        Span::raw(format!("{}", y_max as u64)),
    ];

    let datasets = vec![
        Dataset::default()
            .name("messages")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(x_labels)
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(y_labels)
                .bounds([0.0, y_max * 1.1]),
        );

    f.render_widget(chart, area);
}
