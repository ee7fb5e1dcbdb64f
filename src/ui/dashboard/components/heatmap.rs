//! 30-day hourly activity heatmap
//!
//! One row per day (oldest at the top), one two-column cell per hour.

use super::super::utils::{HEAT_COLORS, heat_color};
use crate::charts::HeatmapGrid;
use crate::charts::heatmap::hour_labels;
use crate::consts::cli_consts::charts::HOURS_PER_DAY;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const CELL: &str = "██";
const LABEL_WIDTH: usize = 6;

/// `MM-DD` row labels, oldest first.
pub fn row_labels(grid: &HeatmapGrid) -> Vec<String> {
    grid.days().iter().map(|d| d.format("%m-%d").to_string()).collect()
}

/// Hour ruler above the cells, marking every sixth hour.
pub fn hour_ruler() -> String {
    let mut ruler = " ".repeat(LABEL_WIDTH);
    for label in hour_labels().iter().step_by(6) {
        ruler.push_str(&format!("{:<12}", label));
    }
    ruler.trim_end().to_string()
}

fn grid_lines(grid: &HeatmapGrid, max_rows: usize) -> Vec<Line<'static>> {
    let labels = row_labels(grid);
    let skip = labels.len().saturating_sub(max_rows);
    let steps = HEAT_COLORS.len();

    labels
        .into_iter()
        .zip(grid.cells().chunks(HOURS_PER_DAY))
        .skip(skip)
        .map(|(label, day)| {
            let mut spans = vec![Span::styled(
                format!("{:<width$}", label, width = LABEL_WIDTH),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(day.iter().map(|cell| {
                Span::styled(
                    CELL,
                    Style::default().fg(heat_color(grid.intensity(cell.count, steps))),
                )
            }));
            Line::from(spans)
        })
        .collect()
}

fn legend(grid: &HeatmapGrid) -> Line<'static> {
    let (low, high) = grid.scale_bounds();
    let mut spans = vec![Span::raw(format!("{:<width$}{} ", "", low, width = LABEL_WIDTH))];
    spans.extend(
        HEAT_COLORS
            .iter()
            .map(|color| Span::styled(CELL, Style::default().fg(*color))),
    );
    spans.push(Span::raw(format!(" {}", high)));
    if let Some(peak) = grid.peak() {
        let day = grid.days()[peak.day_index].format("%m-%d");
        spans.push(Span::styled(
            format!("  peak {} {}:00", day, hour_labels()[peak.hour_index]),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

pub fn render_heatmap(f: &mut Frame, area: Rect, title: &str, grid: Option<&HeatmapGrid>) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green));

    let Some(grid) = grid else {
        f.render_widget(
            Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    // Borders plus ruler and legend
    let max_rows = area.height.saturating_sub(4) as usize;
    let mut lines = vec![Line::styled(hour_ruler(), Style::default().fg(Color::DarkGray))];
    lines.extend(grid_lines(grid, max_rows));
    lines.push(legend(grid));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
