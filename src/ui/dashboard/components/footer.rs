//! Dashboard footer component
//!
//! Key help for the current input mode

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn footer_text(search_focused: bool) -> &'static str {
    if search_focused {
        "Type to search | [Backspace] Delete | [Enter]/[Esc] Done"
    } else {
        "[/] Search | [Q]/[Esc] Quit | ListenTG Dashboard"
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, search_focused: bool) {
    let footer = Paragraph::new(footer_text(search_focused))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
