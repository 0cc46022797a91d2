//! Field rendering utilities for the form panels

use super::{faded, ACCENT, DIM, FG};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered field height in rows
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a single-line field with its label as the block title
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    opacity: f32,
) {
    let style = if is_active {
        Style::default().fg(faded(ACCENT, opacity))
    } else {
        Style::default().fg(faded(FG, opacity))
    };

    let border_style = if is_active {
        Style::default().fg(faded(ACCENT, opacity))
    } else {
        Style::default().fg(faded(DIM, opacity))
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(value.to_string(), style),
        Span::styled(cursor, Style::default().fg(faded(ACCENT, opacity))),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Mask a password value for display
pub fn masked_value(value: &str) -> String {
    "•".repeat(value.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_masked_value_matches_char_count() {
        assert_eq!(masked_value(""), "");
        assert_eq!(masked_value("abc"), "•••");
        assert_eq!(masked_value("pässwörd"), "••••••••");
    }
}
