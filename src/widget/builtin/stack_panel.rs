//! Vertical stack of controls

use crate::display::DisplaySink;
use crate::error::Result;
use crate::geometry::Size;
use crate::render::{
    BlockContent, BlockRenderer, MultiRenderer, Renderer, RenderingContext, RenderingOptions,
};
use crate::widget::{Control, ControlStyle, Styled};

/// Children rendered one after another, each given the panel's content width
///
/// Children with no output (invisible, empty) take no lines.
#[derive(Default)]
pub struct StackPanel {
    style: ControlStyle,
    children: Vec<Box<dyn Control>>,
}

impl StackPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child, builder style
    pub fn child(mut self, child: impl Control + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append a child
    pub fn push(&mut self, child: impl Control + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Styled for StackPanel {
    fn style_mut(&mut self) -> &mut ControlStyle {
        &mut self.style
    }
}

impl Control for StackPanel {
    fn style(&self) -> &ControlStyle {
        &self.style
    }

    fn natural_content_size(&self) -> Size {
        self.children
            .iter()
            .map(|child| child.natural_size())
            .fold(Size::EMPTY, |acc, size| {
                Size::new(acc.width.max(size.width), acc.height + size.height)
            })
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        let content = StackContent {
            children: &self.children,
            lines: MultiRenderer::new(),
        };
        Box::new(BlockRenderer::for_control(self, options, Box::new(content)))
    }
}

struct StackContent<'a> {
    children: &'a [Box<dyn Control>],
    lines: MultiRenderer<'a>,
}

impl<'a> BlockContent for StackContent<'a> {
    fn initialize(&mut self, ctx: &RenderingContext) {
        let width = ctx.content_width();
        let children: &'a [Box<dyn Control>] = self.children;
        let renderers = children
            .iter()
            .map(|child| ctx.create_child_renderer(child.as_ref(), width))
            .collect();
        self.lines = MultiRenderer::from_renderers(renderers);
    }

    fn has_more_lines(&mut self) -> bool {
        self.lines.has_more_lines()
    }

    fn render_next_line(
        &mut self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
    ) -> Result<()> {
        ctx.render_child_line(&mut self.lines, out)
    }
}
