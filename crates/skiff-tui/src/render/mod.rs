//! Rendering for the home view and the search overlay.

mod home;
mod overlay;

pub use home::render_home;
pub use overlay::render_overlay;

use ratatui::style::Color;

pub(crate) const TEXT: Color = Color::Gray;
pub(crate) const TEXT_SUBTLE: Color = Color::DarkGray;
pub(crate) const ACCENT: Color = Color::White;
