//! Core control traits

use crate::geometry::{HorizontalAlignment, Size, Thickness};
use crate::layout::{ControlLayout, LayoutRequest};
use crate::render::{Renderer, RenderingContext, RenderingOptions};
use crate::style::Color;

/// Box-model and color settings shared by every control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlStyle {
    pub margin: Thickness,
    pub padding: Thickness,
    pub alignment: HorizontalAlignment,
    /// Explicit content width
    pub width: Option<usize>,
    /// Upper bound on the full width
    pub max_width: Option<usize>,
    /// Invisible controls produce no lines at all
    pub visible: bool,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl Default for ControlStyle {
    fn default() -> Self {
        Self {
            margin: Thickness::ZERO,
            padding: Thickness::ZERO,
            alignment: HorizontalAlignment::Default,
            width: None,
            max_width: None,
            visible: true,
            foreground: None,
            background: None,
        }
    }
}

/// A node of the control tree
///
/// Implementors describe their natural content size and create renderers;
/// layout and context construction are provided.
pub trait Control {
    fn style(&self) -> &ControlStyle;

    /// Content size with no external constraint
    fn natural_content_size(&self) -> Size;

    /// Alignment used when the style says `Default`
    fn default_alignment(&self) -> HorizontalAlignment {
        HorizontalAlignment::Left
    }

    /// Create a renderer for one display cycle
    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a>;

    /// Compute the box model for `allocated_width`
    fn layout(&self, allocated_width: Option<usize>) -> ControlLayout {
        let style = self.style();
        ControlLayout::calculate(&LayoutRequest {
            margin: style.margin,
            padding: style.padding,
            alignment: style.alignment,
            default_alignment: self.default_alignment(),
            width: style.width,
            max_width: style.max_width,
            natural_size: self.natural_content_size(),
            allocated_width,
            allocated_height: None,
        })
    }

    /// Full size with no external constraint; empty when invisible
    fn natural_size(&self) -> Size {
        if !self.style().visible {
            return Size::EMPTY;
        }
        let layout = self.layout(None);
        Size::new(layout.full_width(), layout.full_height())
    }

    /// Lay out for `options` and build the context that renders the lines
    fn create_context(&self, options: RenderingOptions) -> RenderingContext {
        let style = self.style();
        RenderingContext::new(
            self.layout(options.allocated_width),
            options,
            style.foreground,
            style.background,
        )
    }
}

/// Builder methods for anything that carries a [`ControlStyle`]
pub trait Styled: Sized {
    fn style_mut(&mut self) -> &mut ControlStyle;

    /// Replace the whole style, e.g. with one built from configuration
    fn with_style(mut self, style: ControlStyle) -> Self {
        *self.style_mut() = style;
        self
    }

    /// Set the margin
    fn margin(mut self, margin: Thickness) -> Self {
        self.style_mut().margin = margin;
        self
    }

    /// Set the padding
    fn padding(mut self, padding: Thickness) -> Self {
        self.style_mut().padding = padding;
        self
    }

    /// Set the horizontal alignment
    fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.style_mut().alignment = alignment;
        self
    }

    /// Set an explicit content width
    fn width(mut self, width: usize) -> Self {
        self.style_mut().width = Some(width);
        self
    }

    /// Limit the full width
    fn max_width(mut self, max_width: usize) -> Self {
        self.style_mut().max_width = Some(max_width);
        self
    }

    /// Show or hide the control
    fn visible(mut self, visible: bool) -> Self {
        self.style_mut().visible = visible;
        self
    }

    /// Set the foreground color
    fn foreground(mut self, color: Color) -> Self {
        self.style_mut().foreground = Some(color);
        self
    }

    /// Set the background color
    fn background(mut self, color: Color) -> Self {
        self.style_mut().background = Some(color);
        self
    }
}
