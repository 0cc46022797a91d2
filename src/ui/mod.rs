//! UI module for rendering the TUI

mod components;
mod layout;
mod sign_in;
mod verify;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    match app.state.current_view {
        View::SignIn => sign_in::draw(frame, app, now),
        View::Verify => verify::draw(frame, app),
    }

    // Status bar on the bottom row
    layout::draw_status_bar(frame, app);
}
