//! Stats page panels: summary cards plus the group and daily charts

use super::ranking::render_ranking;
use super::trend::render_trend;
use crate::charts::view::NO_TOP_TALKER;
use crate::charts::{Panel, PanelSet, StatsView};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let widget = Paragraph::new(value)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(widget, area);
}

pub fn render_stats_cards(f: &mut Frame, area: Rect, panels: &PanelSet, view: &StatsView) {
    let cards: Vec<Panel> = [Panel::TodayCount, Panel::TopTalker]
        .into_iter()
        .filter(|p| panels.contains(*p))
        .collect();
    if cards.is_empty() {
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for (panel, chunk) in cards.iter().zip(chunks.iter()) {
        match panel {
            Panel::TodayCount => {
                let value = view
                    .today_message_count
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string());
                card(f, *chunk, panel.title(), value, Color::Cyan);
            }
            Panel::TopTalker => {
                let value = view
                    .top_talker
                    .clone()
                    .unwrap_or_else(|| NO_TOP_TALKER.to_string());
                card(f, *chunk, panel.title(), value, Color::Green);
            }
            _ => {}
        }
    }
}

pub fn render_stats_charts(f: &mut Frame, area: Rect, panels: &PanelSet, view: &StatsView) {
    let charts: Vec<Panel> = [Panel::GroupChart, Panel::DailyChart]
        .into_iter()
        .filter(|p| panels.contains(*p))
        .collect();
    if charts.is_empty() {
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, charts.len() as u32); charts.len()])
        .split(area);

    for (panel, chunk) in charts.iter().zip(chunks.iter()) {
        match panel {
            // Server order, drawn top-down
            Panel::GroupChart => render_ranking(
                f,
                *chunk,
                panel.title(),
                view.group_stats.as_ref(),
                false,
                Color::Cyan,
            ),
            Panel::DailyChart => {
                render_trend(f, *chunk, panel.title(), view.daily_totals.as_ref())
            }
            _ => {}
        }
    }
}
