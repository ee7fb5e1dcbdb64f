//! Dashboard header component
//!
//! Renders the title and the refresh countdown gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use std::time::Duration;

/// Label, colour and percent for the countdown gauge.
pub fn countdown(
    since_last: Option<Duration>,
    interval: Duration,
    consecutive_failures: u32,
    tick: usize,
) -> (String, Color, u16) {
    let Some(elapsed) = since_last else {
        // Nothing has come back yet; animate while waiting
        let progress = ((tick % 20) as f64 / 20.0 * 100.0) as u16;
        return (
            "LOADING - Waiting for first snapshot".to_string(),
            Color::LightBlue,
            progress,
        );
    };

    let interval_ms = interval.as_millis().max(1);
    let percent = (elapsed.as_millis() * 100 / interval_ms).min(100) as u16;
    let remaining = interval.saturating_sub(elapsed).as_secs_f64().ceil() as u64;

    if consecutive_failures > 0 {
        (
            format!(
                "STALE - {} failed refresh(es), retrying in {}s",
                consecutive_failures, remaining
            ),
            Color::LightYellow,
            percent,
        )
    } else {
        (
            format!("LIVE - Next refresh in {}s", remaining),
            Color::LightGreen,
            percent,
        )
    }
}

/// Successful refresh count and uptime, shown after the title.
pub fn session_summary(refresh_count: u64, uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let uptime = if secs >= 86400 {
        format!("{}d {}h {}m", secs / 86400, (secs % 86400) / 3600, (secs % 3600) / 60)
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    };
    format!("{} refreshes | up {}", refresh_count, uptime)
}

/// Render header with title and refresh progress.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "LISTENTG DASHBOARD v{} | {} | {}",
        env!("CARGO_PKG_VERSION"),
        state.api_url,
        session_summary(state.refresh_count(), state.start_time.elapsed())
    );
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = countdown(
        state.last_refresh().map(|at| at.elapsed()),
        state.refresh_interval,
        state.consecutive_failures(),
        state.tick,
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
