//! Horizontal alignment of a control inside its allocated width

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Alignment as configured on a control
///
/// `Default` defers the decision to whoever lays the control out; every
/// other variant maps one-to-one onto [`Alignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HorizontalAlignment {
    #[default]
    Default,
    Left,
    Center,
    Right,
    Stretch,
}

/// Concrete alignment after `Default` has been resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Stretch,
}

impl HorizontalAlignment {
    /// Resolve `Default` against the caller's fallback
    ///
    /// A fallback that is itself `Default` resolves to `Left`.
    pub fn resolve(self, fallback: HorizontalAlignment) -> Alignment {
        match self {
            HorizontalAlignment::Default => match fallback {
                HorizontalAlignment::Default => Alignment::Left,
                other => other.resolve(HorizontalAlignment::Left),
            },
            HorizontalAlignment::Left => Alignment::Left,
            HorizontalAlignment::Center => Alignment::Center,
            HorizontalAlignment::Right => Alignment::Right,
            HorizontalAlignment::Stretch => Alignment::Stretch,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::Default => "default",
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Stretch => "stretch",
        }
    }
}

impl From<Alignment> for HorizontalAlignment {
    fn from(value: Alignment) -> Self {
        match value {
            Alignment::Left => HorizontalAlignment::Left,
            Alignment::Center => HorizontalAlignment::Center,
            Alignment::Right => HorizontalAlignment::Right,
            Alignment::Stretch => HorizontalAlignment::Stretch,
        }
    }
}

impl FromStr for HorizontalAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "" => Ok(HorizontalAlignment::Default),
            "left" => Ok(HorizontalAlignment::Left),
            "center" | "centre" => Ok(HorizontalAlignment::Center),
            "right" => Ok(HorizontalAlignment::Right),
            "stretch" => Ok(HorizontalAlignment::Stretch),
            _ => Err(Error::ParseAlignment(s.to_string())),
        }
    }
}

impl TryFrom<String> for HorizontalAlignment {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HorizontalAlignment> for String {
    fn from(value: HorizontalAlignment) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_fallback() {
        assert_eq!(
            HorizontalAlignment::Default.resolve(HorizontalAlignment::Center),
            Alignment::Center
        );
        assert_eq!(
            HorizontalAlignment::Default.resolve(HorizontalAlignment::Default),
            Alignment::Left
        );
    }

    #[test]
    fn test_explicit_alignment_ignores_fallback() {
        assert_eq!(
            HorizontalAlignment::Right.resolve(HorizontalAlignment::Stretch),
            Alignment::Right
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            "Stretch".parse::<HorizontalAlignment>().unwrap(),
            HorizontalAlignment::Stretch
        );
        assert!(matches!(
            "diagonal".parse::<HorizontalAlignment>(),
            Err(Error::ParseAlignment(_))
        ));
    }
}
