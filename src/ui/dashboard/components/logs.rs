//! Dashboard logs panel component
//!
//! Renders the most recent worker events, newest first

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_worker_color};
use crate::events::{Event as WorkerEvent, EventType, Worker};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn status_icon(event: &WorkerEvent) -> &'static str {
    match (event.event_type, event.log_level) {
        (EventType::Success, _) => "✅",
        (EventType::Error, LogLevel::Warn) => "⚠️",
        (EventType::Error, _) => "❌",
        (EventType::Refresh, _) => "🔄",
        (EventType::Waiting, _) => "⏳",
    }
}

fn worker_tag(worker: &Worker) -> &'static str {
    match worker {
        Worker::Refresher => "refresh",
        Worker::Searcher => "search",
        Worker::Session => "session",
    }
}

pub fn log_line(event: &WorkerEvent) -> Line<'static> {
    let worker_color = get_worker_color(&event.worker);
    Line::from(vec![
        Span::raw(format!("{} ", status_icon(event))),
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("[{}] ", worker_tag(&event.worker)),
            Style::default().fg(worker_color),
        ),
        Span::styled(
            clean_http_error_message(&event.msg),
            Style::default().fg(worker_color),
        ),
    ])
}

pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Borders plus one line of padding top and bottom
    let log_count = (area.height.saturating_sub(4) as usize).max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(log_line)
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for the first refresh...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}
