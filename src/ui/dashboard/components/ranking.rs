//! Horizontal ranking bar charts (top chats, top users)

use super::super::utils::truncate_label;
use crate::charts::ChartSeries;
use ratatui::Frame;
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

/// Rows in drawing order.
///
/// The terminal draws horizontal bars top-down, so the series is walked from
/// its end; a ranked series then shows its highest count first.
pub fn rows(series: &ChartSeries, top_down: bool) -> Vec<(String, u64)> {
    let rows = series.iter().map(|(label, value)| (truncate_label(label), value));
    if top_down {
        rows.rev().collect()
    } else {
        rows.collect()
    }
}

fn panel_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Render one ranking panel. `None` means nothing has arrived yet.
pub fn render_ranking(
    f: &mut Frame,
    area: Rect,
    title: &str,
    series: Option<&ChartSeries>,
    reverse: bool,
    color: Color,
) {
    let block = panel_block(title, color);
    let Some(series) = series.filter(|s| !s.is_empty()) else {
        let text = if series.is_some() { "No data" } else { "Loading..." };
        let placeholder = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let bars: Vec<Bar> = rows(series, reverse)
        .into_iter()
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label))
                .value(value)
                .text_value(value.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(color))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}
