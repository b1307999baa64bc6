//! Horizontal rule

use crate::display::DisplaySink;
use crate::error::Result;
use crate::geometry::{HorizontalAlignment, Size};
use crate::render::{BlockContent, BlockRenderer, Renderer, RenderingContext, RenderingOptions};
use crate::widget::{Control, ControlStyle, Styled};

/// A single line of a repeated character
///
/// Stretches across the allocated width unless an alignment or an explicit
/// width says otherwise. Its natural width is zero, so it never widens the
/// container it sits in.
#[derive(Debug, Clone)]
pub struct HorizontalLine {
    style: ControlStyle,
    character: char,
}

impl HorizontalLine {
    pub fn new() -> Self {
        Self {
            style: ControlStyle::default(),
            character: '─',
        }
    }

    /// Set the repeated character
    pub fn character(mut self, character: char) -> Self {
        self.character = character;
        self
    }
}

impl Default for HorizontalLine {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled for HorizontalLine {
    fn style_mut(&mut self) -> &mut ControlStyle {
        &mut self.style
    }
}

impl Control for HorizontalLine {
    fn style(&self) -> &ControlStyle {
        &self.style
    }

    fn natural_content_size(&self) -> Size {
        Size::new(0, 1)
    }

    fn default_alignment(&self) -> HorizontalAlignment {
        HorizontalAlignment::Stretch
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        let content = RuleContent {
            character: self.character,
            done: false,
        };
        Box::new(BlockRenderer::for_control(self, options, Box::new(content)))
    }
}

struct RuleContent {
    character: char,
    done: bool,
}

impl BlockContent for RuleContent {
    fn initialize(&mut self, _ctx: &RenderingContext) {
        self.done = false;
    }

    fn has_more_lines(&mut self) -> bool {
        !self.done
    }

    fn render_next_line(
        &mut self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
    ) -> Result<()> {
        let rule: String = std::iter::repeat(self.character)
            .take(ctx.content_width())
            .collect();
        ctx.write(out, &rule)?;
        self.done = true;
        Ok(())
    }
}
