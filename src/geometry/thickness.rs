//! Four-sided spacing used for margins and paddings

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Spacing on each side of a box, in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Thickness {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Thickness {
    /// No spacing on any side
    pub const ZERO: Thickness = Thickness::new(0, 0, 0, 0);

    /// Create a thickness with explicit sides
    pub const fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same spacing on all four sides
    pub const fn uniform(value: usize) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical spacing for top/bottom, horizontal spacing for left/right
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Sum of left and right
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Sum of top and bottom
    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }

    /// Check if every side is zero
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}

impl Add for Thickness {
    type Output = Thickness;

    fn add(self, rhs: Thickness) -> Thickness {
        Thickness::new(
            self.left.saturating_add(rhs.left),
            self.top.saturating_add(rhs.top),
            self.right.saturating_add(rhs.right),
            self.bottom.saturating_add(rhs.bottom),
        )
    }
}

impl Sub for Thickness {
    type Output = Thickness;

    fn sub(self, rhs: Thickness) -> Thickness {
        Thickness::new(
            self.left.saturating_sub(rhs.left),
            self.top.saturating_sub(rhs.top),
            self.right.saturating_sub(rhs.right),
            self.bottom.saturating_sub(rhs.bottom),
        )
    }
}

/// Parses compact notation: `"1"` (all sides), `"1 2"` (vertical,
/// horizontal) or `"1 2 3 4"` (left, top, right, bottom). Commas may be
/// used instead of spaces.
impl FromStr for Thickness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::ParseThickness(s.to_string()))?;

        match parts.as_slice() {
            [all] => Ok(Thickness::uniform(*all)),
            [vertical, horizontal] => Ok(Thickness::symmetric(*vertical, *horizontal)),
            [left, top, right, bottom] => Ok(Thickness::new(*left, *top, *right, *bottom)),
            _ => Err(Error::ParseThickness(s.to_string())),
        }
    }
}

impl TryFrom<String> for Thickness {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Thickness> for String {
    fn from(value: Thickness) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.left, self.top, self.right, self.bottom)
    }
}
