//! Sign-up and sign-in panels with the crossfade between them

use super::components::{
    draw_field, faded, masked_value, render_button, ACCENT, BUTTON_HEIGHT, DIM, FG, FIELD_HEIGHT,
};
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
use std::time::Instant;

const CARD_WIDTH: u16 = 64;
/// Width of the Show/Hide column next to a password field
const TOGGLE_WIDTH: u16 = 8;

/// Draw whichever panels are currently laid out. Both can be shown
/// transiently mid-transition; the later draw wins, matching the
/// last-write-wins behavior of the page itself.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    if let Some(panel) = app.store.panel(ids::REGISTRATION_FORM) {
        if panel.shown {
            draw_registration(frame, area, app, panel.rendered_opacity(now));
        }
    }
    if let Some(panel) = app.store.panel(ids::LOGIN_FORM) {
        if panel.shown {
            draw_login(frame, area, app, panel.rendered_opacity(now));
        }
    }
}

fn draw_registration(frame: &mut Frame, area: Rect, app: &App, opacity: f32) {
    let card = centered_card(area, CARD_WIDTH, 13);
    let inner = draw_card(frame, card, " Create account ", opacity);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // email
            Constraint::Length(BUTTON_HEIGHT), // password + toggle
            Constraint::Length(BUTTON_HEIGHT), // confirm + toggle
            Constraint::Length(1),             // gap
            Constraint::Length(1),             // switch link
            Constraint::Min(0),
        ])
        .split(inner);

    draw_text_field(frame, chunks[0], app, ids::REG_EMAIL, "Email", opacity);
    draw_password_row(
        frame,
        chunks[1],
        app,
        ids::REG_PASSWORD,
        ids::TOGGLE_REG_PASSWORD,
        "Password",
        opacity,
    );
    draw_password_row(
        frame,
        chunks[2],
        app,
        ids::REG_PASSWORD2,
        ids::TOGGLE_REG_PASSWORD2,
        "Confirm password",
        opacity,
    );
    draw_switch_link(
        frame,
        chunks[4],
        app,
        ids::SHOW_LOGIN,
        "Already have an account?",
        "Login here",
        opacity,
    );
}

fn draw_login(frame: &mut Frame, area: Rect, app: &App, opacity: f32) {
    let card = centered_card(area, CARD_WIDTH, 10);
    let inner = draw_card(frame, card, " Sign in ", opacity);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // email
            Constraint::Length(BUTTON_HEIGHT), // password + toggle
            Constraint::Length(1),             // gap
            Constraint::Length(1),             // switch link
            Constraint::Min(0),
        ])
        .split(inner);

    draw_text_field(frame, chunks[0], app, ids::LOGIN_EMAIL, "Email", opacity);
    draw_password_row(
        frame,
        chunks[1],
        app,
        ids::LOGIN_PASSWORD,
        ids::TOGGLE_LOGIN_PASSWORD,
        "Password",
        opacity,
    );
    draw_switch_link(
        frame,
        chunks[3],
        app,
        ids::SHOW_REGISTER,
        "New here?",
        "Register here",
        opacity,
    );
}

/// Draw the bordered card and return its inner area
fn draw_card(frame: &mut Frame, card: Rect, title: &str, opacity: f32) -> Rect {
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(faded(FG, opacity))
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(faded(DIM, opacity)));
    let inner = block.inner(card);
    frame.render_widget(block, card);
    inner
}

fn is_focused(app: &App, id: &str) -> bool {
    app.state.focus.active_id() == Some(id)
}

fn draw_text_field(frame: &mut Frame, area: Rect, app: &App, id: &str, label: &str, opacity: f32) {
    if let Some(input) = app.store.text_input(id) {
        draw_field(frame, area, label, &input.value, is_focused(app, id), opacity);
    }
}

fn draw_password_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    input_id: &str,
    toggle_id: &str,
    label: &str,
    opacity: f32,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)])
        .split(area);

    if let Some(field) = app.store.password_input(input_id) {
        let display = if field.is_masked() {
            masked_value(&field.value)
        } else {
            field.value.clone()
        };
        draw_field(
            frame,
            chunks[0],
            label,
            &display,
            is_focused(app, input_id),
            opacity,
        );
    }

    if let Some(button) = app.store.toggle_button(toggle_id) {
        render_button(
            frame,
            chunks[1],
            &button.label,
            is_focused(app, toggle_id),
            opacity,
        );
    }
}

fn draw_switch_link(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    link_id: &str,
    prompt: &str,
    link_text: &str,
    opacity: f32,
) {
    let mut link_style = Style::default()
        .fg(faded(ACCENT, opacity))
        .add_modifier(Modifier::UNDERLINED);
    if is_focused(app, link_id) {
        link_style = link_style.add_modifier(Modifier::BOLD);
    }

    let line = Line::from(vec![
        Span::styled(format!("{prompt} "), Style::default().fg(faded(FG, opacity))),
        Span::styled(link_text.to_string(), link_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
