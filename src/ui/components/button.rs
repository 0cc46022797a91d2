//! Button component for TUI

use super::{faded, ACCENT, DIM, FG};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button at the panel's current opacity
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_focused: bool, opacity: f32) {
    let border_style = if is_focused {
        Style::default().fg(faded(ACCENT, opacity))
    } else {
        Style::default().fg(faded(DIM, opacity))
    };

    let text_style = if is_focused {
        Style::default()
            .fg(faded(ACCENT, opacity))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(faded(FG, opacity))
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
