//! Terminal colors

use crate::error::Error;
use crossterm::style::Color as CrosstermColor;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
    /// RGB color
    Rgb(u8, u8, u8),
    /// ANSI 256-color palette index
    Indexed(u8),
}

const NAMED: [(&str, Color); 16] = [
    ("black", Color::Black),
    ("dark_grey", Color::DarkGrey),
    ("red", Color::Red),
    ("dark_red", Color::DarkRed),
    ("green", Color::Green),
    ("dark_green", Color::DarkGreen),
    ("yellow", Color::Yellow),
    ("dark_yellow", Color::DarkYellow),
    ("blue", Color::Blue),
    ("dark_blue", Color::DarkBlue),
    ("magenta", Color::Magenta),
    ("dark_magenta", Color::DarkMagenta),
    ("cyan", Color::Cyan),
    ("dark_cyan", Color::DarkCyan),
    ("white", Color::White),
    ("grey", Color::Grey),
];

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::Rgb(r, g, b))
    }
}

/// Accepts snake_case names (`"dark_grey"`, dashes and spaces also allowed),
/// hex values (`"#ff8800"`) and palette indexes (`"index:208"`).
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_ascii_lowercase()
            .replace(|c: char| c == '-' || c == ' ', "_")
            .replace("gray", "grey");

        if let Some((_, color)) = NAMED.iter().find(|(name, _)| *name == normalized) {
            return Ok(*color);
        }
        if let Some(index) = normalized.strip_prefix("index:") {
            return index
                .parse::<u8>()
                .map(Color::Indexed)
                .map_err(|_| Error::ParseColor(s.to_string()));
        }
        Color::from_hex(&normalized).ok_or_else(|| Error::ParseColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        match color {
            Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
            Color::Indexed(i) => format!("index:{i}"),
            named => NAMED
                .iter()
                .find(|(_, color)| *color == named)
                .map(|(name, _)| name.to_string())
                .unwrap_or_default(),
        }
    }
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => CrosstermColor::Black,
            Color::DarkGrey => CrosstermColor::DarkGrey,
            Color::Red => CrosstermColor::Red,
            Color::DarkRed => CrosstermColor::DarkRed,
            Color::Green => CrosstermColor::Green,
            Color::DarkGreen => CrosstermColor::DarkGreen,
            Color::Yellow => CrosstermColor::Yellow,
            Color::DarkYellow => CrosstermColor::DarkYellow,
            Color::Blue => CrosstermColor::Blue,
            Color::DarkBlue => CrosstermColor::DarkBlue,
            Color::Magenta => CrosstermColor::Magenta,
            Color::DarkMagenta => CrosstermColor::DarkMagenta,
            Color::Cyan => CrosstermColor::Cyan,
            Color::DarkCyan => CrosstermColor::DarkCyan,
            Color::White => CrosstermColor::White,
            Color::Grey => CrosstermColor::Grey,
            Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
            Color::Indexed(i) => CrosstermColor::AnsiValue(i),
        }
    }
}
