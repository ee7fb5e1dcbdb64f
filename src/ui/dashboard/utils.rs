//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::consts::cli_consts::charts::LABEL_MAX_CHARS;
use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Refresher => Color::Cyan,
        Worker::Searcher => Color::Yellow,
        Worker::Session => Color::Green,
    }
}

/// Shorten an axis label to `LABEL_MAX_CHARS` characters plus `...`.
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > LABEL_MAX_CHARS {
        let head: String = label.chars().take(LABEL_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    let lower = msg.to_lowercase();
    if lower.contains("error sending request") || lower.contains("connection refused") {
        return "Server unreachable - will retry on next refresh".to_string();
    }
    if lower.contains("timed out") || lower.contains("timeout") {
        return "Request timed out - will retry on next refresh".to_string();
    }
    msg.to_string()
}

/// Five-step colour ramp for heatmap cells, from no activity to busiest.
pub const HEAT_COLORS: [Color; 5] = [
    Color::Rgb(40, 44, 52),
    Color::Rgb(14, 68, 41),
    Color::Rgb(0, 109, 50),
    Color::Rgb(38, 166, 65),
    Color::Rgb(57, 211, 83),
];

pub fn heat_color(step: usize) -> Color {
    HEAT_COLORS[step.min(HEAT_COLORS.len() - 1)]
}
