//! Renderer shape shared by every boxed control

use super::{MultiRenderer, Renderer, RenderingContext, RenderingOptions};
use crate::display::DisplaySink;
use crate::error::{Error, Result};
use crate::widget::Control;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

type SharedContext = Rc<RefCell<RenderingContext>>;

/// Content hooks of a [`BlockRenderer`]
///
/// Implementations only write content: the block renderer begins and ends
/// every line and produces the margin and padding lines itself.
pub trait BlockContent {
    /// Prepare to produce content from the first line
    ///
    /// Called lazily before the first query and again after every reset.
    fn initialize(&mut self, ctx: &RenderingContext);

    /// Whether another content line follows
    fn has_more_lines(&mut self) -> bool;

    /// Write one content line between `begin_line` and `end_line`
    fn render_next_line(
        &mut self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
    ) -> Result<()>;
}

/// Margin-top, padding-top, content, padding-bottom and margin-bottom
/// chained into one renderer
pub struct BlockRenderer<'a> {
    visible: bool,
    context: SharedContext,
    sections: MultiRenderer<'a>,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(context: RenderingContext, visible: bool, content: Box<dyn BlockContent + 'a>) -> Self {
        let context = Rc::new(RefCell::new(context));
        let sections = MultiRenderer::from_renderers(vec![
            Box::new(Spacing::new(&context, Section::MarginTop)),
            Box::new(Spacing::new(&context, Section::PaddingTop)),
            Box::new(ContentSection {
                context: Rc::clone(&context),
                content,
                initialized: false,
            }),
            Box::new(Spacing::new(&context, Section::PaddingBottom)),
            Box::new(Spacing::new(&context, Section::MarginBottom)),
        ]);

        Self {
            visible,
            context,
            sections,
        }
    }

    /// Lay out `control` for `options` and wrap `content`
    pub fn for_control(
        control: &dyn Control,
        options: RenderingOptions,
        content: Box<dyn BlockContent + 'a>,
    ) -> Self {
        let style = control.style();
        Self::new(control.create_context(options), style.visible, content)
    }

    /// The context shared by all sections
    pub fn context(&self) -> Ref<'_, RenderingContext> {
        self.context.borrow()
    }
}

impl Renderer for BlockRenderer<'_> {
    fn has_more_lines(&mut self) -> bool {
        self.visible && self.sections.has_more_lines()
    }

    fn render_next_line(&mut self, out: &mut dyn DisplaySink) -> Result<()> {
        if !self.visible {
            return Err(Error::NoMoreLines);
        }
        self.sections.render_next_line(out)
    }

    fn reset(&mut self) {
        self.sections.reset();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    MarginTop,
    PaddingTop,
    PaddingBottom,
    MarginBottom,
}

struct Spacing {
    context: SharedContext,
    section: Section,
    remaining: Option<usize>,
}

impl Spacing {
    fn new(context: &SharedContext, section: Section) -> Self {
        Self {
            context: Rc::clone(context),
            section,
            remaining: None,
        }
    }

    fn remaining(&mut self) -> usize {
        let context = &self.context;
        let section = self.section;
        *self.remaining.get_or_insert_with(|| {
            let ctx = context.borrow();
            let layout = ctx.layout();
            match section {
                Section::MarginTop => layout.margin().top,
                Section::PaddingTop => layout.padding().top,
                Section::PaddingBottom => layout.padding().bottom,
                Section::MarginBottom => layout.margin().bottom,
            }
        })
    }
}

impl Renderer for Spacing {
    fn has_more_lines(&mut self) -> bool {
        self.remaining() > 0
    }

    fn render_next_line(&mut self, out: &mut dyn DisplaySink) -> Result<()> {
        let remaining = self.remaining();
        if remaining == 0 {
            return Err(Error::NoMoreLines);
        }

        let mut ctx = self.context.borrow_mut();
        match self.section {
            Section::MarginTop | Section::MarginBottom => ctx.write_margin_line(out)?,
            Section::PaddingTop | Section::PaddingBottom => {
                ctx.begin_line(out)?;
                ctx.end_line(out)?;
            }
        }
        self.remaining = Some(remaining - 1);
        Ok(())
    }

    fn reset(&mut self) {
        self.remaining = None;
    }
}

struct ContentSection<'a> {
    context: SharedContext,
    content: Box<dyn BlockContent + 'a>,
    initialized: bool,
}

impl ContentSection<'_> {
    fn ensure_initialized(&mut self) {
        if !self.initialized {
            self.content.initialize(&self.context.borrow());
            self.initialized = true;
        }
    }
}

impl Renderer for ContentSection<'_> {
    fn has_more_lines(&mut self) -> bool {
        self.ensure_initialized();
        self.content.has_more_lines()
    }

    fn render_next_line(&mut self, out: &mut dyn DisplaySink) -> Result<()> {
        self.ensure_initialized();
        if !self.content.has_more_lines() {
            return Err(Error::NoMoreLines);
        }

        let mut ctx = self.context.borrow_mut();
        ctx.begin_line(out)?;
        self.content.render_next_line(&mut ctx, out)?;
        ctx.end_line(out)
    }

    fn reset(&mut self) {
        self.initialized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::StringDisplay;
    use crate::geometry::{Size, Thickness};
    use crate::layout::{ControlLayout, LayoutRequest};

    struct Rows {
        rows: Vec<&'static str>,
        next: usize,
        initializations: usize,
    }

    impl BlockContent for Rows {
        fn initialize(&mut self, _ctx: &RenderingContext) {
            self.next = 0;
            self.initializations += 1;
        }

        fn has_more_lines(&mut self) -> bool {
            self.next < self.rows.len()
        }

        fn render_next_line(
            &mut self,
            ctx: &mut RenderingContext,
            out: &mut dyn DisplaySink,
        ) -> Result<()> {
            ctx.write(out, self.rows[self.next])?;
            self.next += 1;
            Ok(())
        }
    }

    fn block(rows: Vec<&'static str>, margin: Thickness, padding: Thickness, visible: bool) -> BlockRenderer<'static> {
        let request = LayoutRequest {
            margin,
            padding,
            natural_size: Size::new(3, rows.len()),
            ..Default::default()
        };
        let context = RenderingContext::new(
            ControlLayout::calculate(&request),
            RenderingOptions::root(None),
            None,
            None,
        );
        let content = Rows {
            rows,
            next: 0,
            initializations: 0,
        };
        BlockRenderer::new(context, visible, Box::new(content))
    }

    fn drain(renderer: &mut dyn Renderer) -> String {
        let mut out = StringDisplay::new();
        while renderer.has_more_lines() {
            renderer.render_next_line(&mut out).unwrap();
        }
        out.into_string()
    }

    #[test]
    fn test_sections_in_order() {
        let mut renderer = block(
            vec!["ab", "c"],
            Thickness::new(0, 1, 0, 1),
            Thickness::new(1, 1, 1, 0),
            true,
        );
        assert_eq!(drain(&mut renderer), "     \n     \n ab  \n c   \n     \n");
    }

    #[test]
    fn test_invisible_block_has_no_lines() {
        let mut renderer = block(vec!["ab"], Thickness::uniform(1), Thickness::ZERO, false);
        assert!(!renderer.has_more_lines());
        let mut out = StringDisplay::new();
        assert!(matches!(
            renderer.render_next_line(&mut out),
            Err(Error::NoMoreLines)
        ));
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn test_reset_reinitializes_content() {
        let mut renderer = block(vec!["x"], Thickness::ZERO, Thickness::ZERO, true);
        assert_eq!(drain(&mut renderer), "x  \n");
        renderer.reset();
        assert_eq!(drain(&mut renderer), "x  \n");
        assert_eq!(renderer.context().lines_rendered(), 2);
    }
}
