//! Single-child wrapper

use crate::display::DisplaySink;
use crate::error::Result;
use crate::geometry::Size;
use crate::render::{BlockContent, BlockRenderer, Renderer, RenderingContext, RenderingOptions};
use crate::widget::{Control, ControlStyle, Styled};

/// Adds its own margin, padding, alignment and colors around one child
#[derive(Default)]
pub struct ContentControl {
    style: ControlStyle,
    content: Option<Box<dyn Control>>,
}

impl ContentControl {
    pub fn new(content: impl Control + 'static) -> Self {
        Self {
            style: ControlStyle::default(),
            content: Some(Box::new(content)),
        }
    }

    /// Create a wrapper with no child; it renders only its spacing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the child
    pub fn set_content(&mut self, content: impl Control + 'static) {
        self.content = Some(Box::new(content));
    }

    pub fn content(&self) -> Option<&dyn Control> {
        self.content.as_deref()
    }
}

impl Styled for ContentControl {
    fn style_mut(&mut self) -> &mut ControlStyle {
        &mut self.style
    }
}

impl Control for ContentControl {
    fn style(&self) -> &ControlStyle {
        &self.style
    }

    fn natural_content_size(&self) -> Size {
        self.content
            .as_ref()
            .map(|content| content.natural_size())
            .unwrap_or(Size::EMPTY)
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        let content = WrappedContent {
            content: self.content.as_deref(),
            child: None,
        };
        Box::new(BlockRenderer::for_control(self, options, Box::new(content)))
    }
}

struct WrappedContent<'a> {
    content: Option<&'a dyn Control>,
    child: Option<Box<dyn Renderer + 'a>>,
}

impl BlockContent for WrappedContent<'_> {
    fn initialize(&mut self, ctx: &RenderingContext) {
        let width = ctx.content_width();
        self.child = self
            .content
            .map(|content| ctx.create_child_renderer(content, width));
    }

    fn has_more_lines(&mut self) -> bool {
        self.child
            .as_mut()
            .is_some_and(|child| child.has_more_lines())
    }

    fn render_next_line(
        &mut self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
    ) -> Result<()> {
        match self.child.as_mut() {
            Some(child) => ctx.render_child_line(child.as_mut(), out),
            None => Ok(()),
        }
    }
}
