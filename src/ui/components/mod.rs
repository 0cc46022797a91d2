//! Reusable UI components

mod button;
mod field_renderer;

pub use button::*;
pub use field_renderer::*;

use ratatui::style::Color;

/// Scale an RGB color toward the background by a panel opacity
pub fn faded(rgb: (u8, u8, u8), opacity: f32) -> Color {
    let o = opacity.clamp(0.0, 1.0);
    Color::Rgb(
        (f32::from(rgb.0) * o) as u8,
        (f32::from(rgb.1) * o) as u8,
        (f32::from(rgb.2) * o) as u8,
    )
}

/// Accent color for focused elements
pub const ACCENT: (u8, u8, u8) = (0, 200, 200);
/// Plain foreground
pub const FG: (u8, u8, u8) = (220, 220, 220);
/// De-emphasized foreground
pub const DIM: (u8, u8, u8) = (110, 110, 110);
