//! Toolkit configuration
//!
//! Loaded from TOML. Every section and field is optional; missing values
//! fall back to the dark theme, default alignment and `info` logging.

use crate::error::{Error, Result};
use crate::geometry::{HorizontalAlignment, Thickness};
use crate::style::{Color, Theme};
use crate::widget::ControlStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Top-level toolkit configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Color overrides
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Alignment of controls whose own alignment is `default`
    #[serde(default)]
    pub default_alignment: HorizontalAlignment,

    /// Margin given to controls built from [`ToolkitConfig::control_style`]
    #[serde(default)]
    pub default_margin: Thickness,

    /// Padding given to controls built from [`ToolkitConfig::control_style`]
    #[serde(default)]
    pub default_padding: Thickness,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ToolkitConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded toolkit configuration");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(Error::invalid_argument(
                "logging.level",
                format!("unknown log level `{}`", self.logging.level),
            )),
        }
    }

    /// Theme with the configured overrides applied
    pub fn theme(&self) -> Theme {
        self.theme.resolve()
    }

    /// Base style carrying the configured defaults
    pub fn control_style(&self) -> ControlStyle {
        ControlStyle {
            margin: self.default_margin,
            padding: self.default_padding,
            alignment: self.default_alignment,
            background: self.theme().background,
            ..ControlStyle::default()
        }
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Built-in theme a configuration starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
}

/// `[theme]` section: a preset plus per-color overrides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub preset: ThemePreset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasized: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_foreground: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl ThemeConfig {
    fn resolve(&self) -> Theme {
        let base = match self.preset {
            ThemePreset::Dark => Theme::dark(),
            ThemePreset::Light => Theme::light(),
        };
        Theme {
            emphasized: self.emphasized.unwrap_or(base.emphasized),
            error: self.error.unwrap_or(base.error),
            border: self.border.unwrap_or(base.border),
            selection_foreground: self.selection_foreground.unwrap_or(base.selection_foreground),
            selection_background: self.selection_background.unwrap_or(base.selection_background),
            background: self.background.or(base.background),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for the crate's own events
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ToolkitConfig::from_toml_str("").unwrap();
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.theme(), Theme::dark());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_theme_overrides_apply_to_preset() {
        let config = ToolkitConfig::from_toml_str(
            r##"
            [theme]
            preset = "light"
            border = "dark_grey"
            emphasized = "#ff8800"
            "##,
        )
        .unwrap();
        let theme = config.theme();
        assert_eq!(theme.border, Color::DarkGrey);
        assert_eq!(theme.emphasized, Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(theme.error, Theme::light().error);
        assert_eq!(theme.background, Some(Color::White));
    }

    #[test]
    fn test_layout_defaults_flow_into_style() {
        let config = ToolkitConfig::from_toml_str(
            r#"
            default_alignment = "Center"
            default_margin = "1 2"
            default_padding = "0,1,0,1"
            "#,
        )
        .unwrap();
        let style = config.control_style();
        assert_eq!(style.alignment, HorizontalAlignment::Center);
        assert_eq!(style.margin, Thickness::new(2, 1, 2, 1));
        assert_eq!(style.padding, Thickness::new(0, 1, 0, 1));
        assert!(style.visible);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ToolkitConfig::from_toml_str("default_alignment = \"diagonal\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ToolkitConfig::from_toml_str("[theme]\nborder = \"mauve-ish\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ToolkitConfig::from_toml_str("[logging]\nlevel = \"loud\""),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = ToolkitConfig::default();
        config.theme.border = Some(Color::Blue);
        config.default_alignment = HorizontalAlignment::Right;
        let text = config.to_toml_string().unwrap();
        assert_eq!(ToolkitConfig::from_toml_str(&text).unwrap(), config);
    }
}
