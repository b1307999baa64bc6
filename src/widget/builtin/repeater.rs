//! Repeated rendering of one control

use crate::display::DisplaySink;
use crate::error::Result;
use crate::geometry::Size;
use crate::render::{BlockContent, BlockRenderer, Renderer, RenderingContext, RenderingOptions};
use crate::widget::{CloseSignal, Control, ControlStyle, Styled};
use tracing::{debug, trace};

/// Renders its content again and again
///
/// Runs a fixed number of passes, or until its [`CloseSignal`] is raised
/// when no count is set. The signal is checked between passes only, so a
/// pass in progress always completes.
pub struct Repeater {
    style: ControlStyle,
    content: Box<dyn Control>,
    times: Option<usize>,
    close: CloseSignal,
}

impl Repeater {
    pub fn new(content: impl Control + 'static) -> Self {
        Self {
            style: ControlStyle::default(),
            content: Box::new(content),
            times: None,
            close: CloseSignal::new(),
        }
    }

    /// Stop after `times` passes
    pub fn times(mut self, times: usize) -> Self {
        self.times = Some(times);
        self
    }

    /// Stop when `close` is raised
    pub fn close_signal(mut self, close: CloseSignal) -> Self {
        self.close = close;
        self
    }

    /// Handle for stopping the repeater from elsewhere
    pub fn closer(&self) -> CloseSignal {
        self.close.clone()
    }
}

impl Styled for Repeater {
    fn style_mut(&mut self) -> &mut ControlStyle {
        &mut self.style
    }
}

impl Control for Repeater {
    fn style(&self) -> &ControlStyle {
        &self.style
    }

    fn natural_content_size(&self) -> Size {
        let pass = self.content.natural_size();
        Size::new(pass.width, pass.height.saturating_mul(self.times.unwrap_or(1)))
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        let content = RepeatContent {
            repeater: self,
            child: None,
            passes: 0,
        };
        Box::new(BlockRenderer::for_control(self, options, Box::new(content)))
    }
}

struct RepeatContent<'a> {
    repeater: &'a Repeater,
    child: Option<Box<dyn Renderer + 'a>>,
    passes: usize,
}

impl BlockContent for RepeatContent<'_> {
    fn initialize(&mut self, ctx: &RenderingContext) {
        let width = ctx.content_width();
        self.child = Some(ctx.create_child_renderer(self.repeater.content.as_ref(), width));
        self.passes = 0;
    }

    fn has_more_lines(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };
        if self.passes > 0 && child.has_more_lines() {
            return true;
        }

        if self.repeater.close.is_close_requested() {
            debug!(passes = self.passes, "repeater closed");
            return false;
        }
        if self.repeater.times.is_some_and(|times| self.passes >= times) {
            return false;
        }

        child.reset();
        if !child.has_more_lines() {
            // empty content ends the repeat
            return false;
        }
        self.passes += 1;
        trace!(pass = self.passes, "repeater pass started");
        true
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::StringDisplay;
    use crate::render::render_to_string;
    use crate::widget::builtin::TextBlock;

    #[test]
    fn test_fixed_number_of_passes() {
        let repeater = Repeater::new(TextBlock::new("ab\nc")).times(2);
        assert_eq!(repeater.natural_content_size(), Size::new(2, 4));
        assert_eq!(
            render_to_string(&repeater, None).unwrap(),
            "ab\nc \nab\nc \n"
        );
    }

    #[test]
    fn test_huge_pass_count_saturates_height() {
        let repeater = Repeater::new(TextBlock::new("a\nb")).times(usize::MAX);
        assert_eq!(
            repeater.natural_content_size(),
            Size::new(1, usize::MAX)
        );
    }

    #[test]
    fn test_zero_passes_render_nothing() {
        let repeater = Repeater::new(TextBlock::new("x")).times(0);
        assert_eq!(render_to_string(&repeater, None).unwrap(), "");
    }

    #[test]
    fn test_close_finishes_current_pass() {
        let repeater = Repeater::new(TextBlock::new("1\n2"));
        let closer = repeater.closer();
        let mut renderer = repeater.create_renderer(RenderingOptions::root(None));
        let mut out = StringDisplay::new();

        for _ in 0..3 {
            assert!(renderer.has_more_lines());
            renderer.render_next_line(&mut out).unwrap();
        }
        closer.request_close();
        while renderer.has_more_lines() {
            renderer.render_next_line(&mut out).unwrap();
        }

        assert_eq!(out.lines(), ["1", "2", "1", "2"]);
    }

    #[test]
    fn test_closed_before_start_renders_nothing() {
        let close = CloseSignal::new();
        close.request_close();
        let repeater = Repeater::new(TextBlock::new("x")).close_signal(close);
        assert_eq!(render_to_string(&repeater, None).unwrap(), "");
    }

    #[test]
    fn test_empty_content_stops_unbounded_repeat() {
        let repeater = Repeater::new(TextBlock::new("x").visible(false));
        assert_eq!(render_to_string(&repeater, Some(5)).unwrap(), "");
    }
}
