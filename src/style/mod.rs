//! Colors and themes

mod color;
mod theme;

pub use color::Color;
pub use theme::Theme;
