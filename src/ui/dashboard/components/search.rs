//! Search box and results

use super::super::state::{DashboardState, NO_MATCHES, SEARCH_FAILED, SearchResults, SearchState};
use crate::workers::searchable_query;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Lines for the results area.
pub fn result_lines(search: &SearchState) -> Vec<Line<'static>> {
    match &search.results {
        SearchResults::Empty => {
            if searchable_query(&search.input).is_none() && !search.input.trim().is_empty() {
                vec![Line::styled(
                    "Type at least 2 characters",
                    Style::default().fg(Color::DarkGray),
                )]
            } else {
                Vec::new()
            }
        }
        SearchResults::Failed { .. } => vec![Line::styled(
            SEARCH_FAILED,
            Style::default().fg(Color::LightRed),
        )],
        SearchResults::Hits { hits, .. } if hits.is_empty() => vec![Line::styled(
            NO_MATCHES,
            Style::default().fg(Color::DarkGray),
        )],
        SearchResults::Hits { hits, .. } => hits
            .iter()
            .flat_map(|hit| {
                [
                    Line::styled(
                        hit.heading(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::raw(hit.text.clone().unwrap_or_default()),
                ]
            })
            .collect(),
    }
}

pub fn render_search(f: &mut Frame, area: Rect, state: &DashboardState) {
    let search = &state.search;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    let border_color = if search.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let mut input = vec![Span::raw(search.input.clone())];
    if search.focused && state.tick % 10 < 5 {
        input.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    let input_box = Paragraph::new(Line::from(input)).block(
        Block::default()
            .title(if search.focused {
                "SEARCH [Enter] done"
            } else {
                "SEARCH [/]"
            })
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input_box, chunks[0]);

    let results = Paragraph::new(result_lines(search))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("RESULTS")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow))
                .padding(Padding::horizontal(1)),
        );
    f.render_widget(results, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::MessageRecord;

    fn with_results(input: &str, results: SearchResults) -> SearchState {
        SearchState {
            input: input.to_string(),
            focused: true,
            results,
        }
    }

    #[test]
    fn test_no_matches_message() {
        let state = with_results(
            "zz",
            SearchResults::Hits {
                query: "zz".into(),
                hits: vec![],
            },
        );
        let lines = result_lines(&state);
        assert_eq!(lines, vec![Line::styled(NO_MATCHES, Style::default().fg(Color::DarkGray))]);
    }

    #[test]
    fn test_failure_message() {
        let state = with_results("zz", SearchResults::Failed { query: "zz".into() });
        assert_eq!(lines_text(&result_lines(&state)), vec![SEARCH_FAILED.to_string()]);
    }

    #[test]
    fn test_hits_render_heading_and_text() {
        let state = with_results(
            "hello",
            SearchResults::Hits {
                query: "hello".into(),
                hits: vec![MessageRecord {
                    text: Some("hello world".into()),
                    chat_title: Some("general".into()),
                    sender_name: Some("alice".into()),
                    date: Some("2024-01-01T00:00:00Z".into()),
                }],
            },
        );
        assert_eq!(
            lines_text(&result_lines(&state)),
            vec![
                "general - alice at 2024-01-01".to_string(),
                "hello world".to_string()
            ]
        );
    }

    #[test]
    fn test_short_input_hint() {
        let state = with_results("a", SearchResults::Empty);
        assert_eq!(
            lines_text(&result_lines(&state)),
            vec!["Type at least 2 characters".to_string()]
        );
        assert!(result_lines(&with_results("", SearchResults::Empty)).is_empty());
    }

    fn lines_text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }
}
