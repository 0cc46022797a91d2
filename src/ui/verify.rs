//! Email verification view with the OTP input

use super::components::{draw_field, faded, ACCENT, DIM, FG, FIELD_HEIGHT};
use super::layout::centered_card;
use crate::app::App;
use crate::state::ids;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 64;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let card = centered_card(area, CARD_WIDTH, 11);

    let block = Block::default()
        .title(" Verify your email ")
        .title_style(
            Style::default()
                .fg(faded(FG, 1.0))
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(faded(DIM, 1.0)));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // prompt
            Constraint::Length(1),            // email
            Constraint::Length(1),            // gap
            Constraint::Length(FIELD_HEIGHT), // otp input
            Constraint::Length(1),            // resend link
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "We sent a 6-digit code to",
            Style::default().fg(faded(FG, 1.0)),
        ))),
        chunks[0],
    );

    if let Some(label) = app.store.label(ids::USER_EMAIL) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label.text.clone(),
                Style::default()
                    .fg(faded(ACCENT, 1.0))
                    .add_modifier(Modifier::BOLD),
            ))),
            chunks[1],
        );
    }

    if let Some(input) = app.store.text_input(ids::OTP) {
        let focused = app.state.focus.active_id() == Some(ids::OTP);
        draw_field(frame, chunks[3], "Verification code", &input.value, focused, 1.0);
    }

    draw_resend_link(frame, chunks[4], app);
}

fn draw_resend_link(frame: &mut Frame, area: Rect, app: &App) {
    if app.store.link(ids::RESEND).is_none() {
        return;
    }
    let focused = app.state.focus.active_id() == Some(ids::RESEND);
    let mut link_style = Style::default()
        .fg(faded(ACCENT, 1.0))
        .add_modifier(Modifier::UNDERLINED);
    if focused {
        link_style = link_style.add_modifier(Modifier::BOLD);
    }

    let line = Line::from(vec![
        Span::styled("Didn't get it? ", Style::default().fg(faded(FG, 1.0))),
        Span::styled("Resend code", link_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
