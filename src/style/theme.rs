//! Theme values threaded through widget construction

use super::Color;

/// Colors shared by widgets that highlight, frame or report errors
///
/// Widgets copy what they need from a `Theme` when they are built, so a
/// rendering pass never reads process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Accent for prompts, titles and headers
    pub emphasized: Color,
    /// Color for validation and error messages
    pub error: Color,
    /// Color for frame characters
    pub border: Color,
    /// Foreground of the selected menu item
    pub selection_foreground: Color,
    /// Background of the selected menu item
    pub selection_background: Color,
    /// Background applied to root controls, `None` keeps the terminal default
    pub background: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Theme for dark terminals
    pub fn dark() -> Self {
        Self {
            emphasized: Color::Cyan,
            error: Color::Red,
            border: Color::DarkGrey,
            selection_foreground: Color::Black,
            selection_background: Color::Cyan,
            background: None,
        }
    }

    /// Theme for light terminals
    pub fn light() -> Self {
        Self {
            emphasized: Color::Blue,
            error: Color::DarkRed,
            border: Color::Grey,
            selection_foreground: Color::White,
            selection_background: Color::Blue,
            background: Some(Color::White),
        }
    }
}
