//! Dashboard main renderer

use super::components::{footer, header, heatmap, logs, ranking, search, stats, trend};
use super::state::DashboardState;
use crate::api::ApiVariant;
use crate::charts::Panel;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

const CHART_PANELS: [Panel; 4] = [
    Panel::TopChats7Days,
    Panel::TopUsers7Days,
    Panel::TopChatsToday,
    Panel::TotalMessages7Days,
];

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(45),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    match state.panels.variant() {
        ApiVariant::Dashboard => render_chart_row(f, main_chunks[1], state),
        ApiVariant::Stats => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Fill(1)])
                .split(main_chunks[1]);
            stats::render_stats_cards(f, rows[0], &state.panels, &state.stats);
            stats::render_stats_charts(f, rows[1], &state.panels, &state.stats);
        }
    }
    render_lower_row(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state.search.focused);
}

fn render_chart_row(f: &mut Frame, area: Rect, state: &DashboardState) {
    let enabled: Vec<Panel> = CHART_PANELS
        .into_iter()
        .filter(|p| state.panels.contains(*p))
        .collect();
    if enabled.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, enabled.len() as u32); enabled.len()])
        .split(area);

    let view = &state.snapshot;
    for (panel, chunk) in enabled.iter().zip(chunks.iter()) {
        let title = panel.title();
        match panel {
            Panel::TopChats7Days => ranking::render_ranking(
                f,
                *chunk,
                title,
                view.top_chats_7_days.as_ref(),
                true,
                Color::Cyan,
            ),
            Panel::TopUsers7Days => ranking::render_ranking(
                f,
                *chunk,
                title,
                view.top_users_7_days.as_ref(),
                true,
                Color::LightBlue,
            ),
            Panel::TopChatsToday => ranking::render_ranking(
                f,
                *chunk,
                title,
                view.top_chats_today.as_ref(),
                true,
                Color::Yellow,
            ),
            Panel::TotalMessages7Days => {
                trend::render_trend(f, *chunk, title, view.total_messages_7_days.as_ref())
            }
            _ => {}
        }
    }
}

fn render_lower_row(f: &mut Frame, area: Rect, state: &DashboardState) {
    let show_heatmap = state.panels.contains(Panel::HourlyActivityHeatmap);
    let constraints = if show_heatmap {
        vec![
            Constraint::Length(56),
            Constraint::Percentage(40),
            Constraint::Fill(1),
        ]
    } else {
        vec![Constraint::Percentage(45), Constraint::Fill(1)]
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let mut rest = chunks.iter();
    if show_heatmap {
        if let Some(chunk) = rest.next() {
            heatmap::render_heatmap(
                f,
                *chunk,
                Panel::HourlyActivityHeatmap.title(),
                state.snapshot.hourly_activity.as_ref(),
            );
        }
    }
    if let Some(chunk) = rest.next() {
        search::render_search(f, *chunk, state);
    }
    if let Some(chunk) = rest.next() {
        logs::render_logs_panel(f, *chunk, state);
    }
}
