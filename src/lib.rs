//! consolekit: line-streaming console widgets
//!
//! This crate provides:
//! - Geometry primitives (`Size`, `Thickness`, alignments)
//! - A box-model layout engine for nested controls under width constraints
//! - Pull-based renderers that stream output one display line at a time
//! - Multi-line text with character and word wrapping
//! - Display sinks for terminals, streams and strings
//! - Built-in widgets: text blocks, borders, stacks, grids, menus, prompts

pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod instance;
pub mod layout;
pub mod logging;
pub mod render;
pub mod style;
pub mod text;
pub mod widget;

// Re-export commonly used types
pub use config::ToolkitConfig;
pub use display::{DisplaySink, StreamDisplay, StringDisplay, TerminalDisplay};
pub use error::{Error, Result};
pub use geometry::{Alignment, HorizontalAlignment, Size, Thickness};
pub use instance::SingleInstance;
pub use layout::{ControlLayout, LayoutRequest};
pub use render::{render, render_to_string, MultiRenderer, Renderer, RenderingContext, RenderingOptions};
pub use style::{Color, Theme};
pub use text::{MultilineText, TextOverflow};
pub use widget::{CloseSignal, Control, ControlStyle, Styled};
