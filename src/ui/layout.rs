//! Layout helpers and the status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Center a fixed-size card inside `area`, clamping to fit
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the bottom status bar with key hints and the current notice
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = match app.state.current_view {
        View::SignIn => " Tab next field | Enter select | Esc quit",
        View::Verify => " Tab next field | Enter select | Esc back",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    if let Some(notice) = &app.notice {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_centered_card_is_centered() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        };
        let card = centered_card(area, 60, 20);
        assert_eq!(card.x, 20);
        assert_eq!(card.y, 10);
        assert_eq!(card.width, 60);
        assert_eq!(card.height, 20);
    }

    #[test]
    fn test_centered_card_clamps_to_small_areas() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 30,
            height: 10,
        };
        let card = centered_card(area, 60, 20);
        assert_eq!(card.width, 30);
        assert_eq!(card.height, 10);
    }
}
