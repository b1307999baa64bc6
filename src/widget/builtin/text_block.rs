//! Text block widget

use crate::display::DisplaySink;
use crate::error::Result;
use crate::geometry::Size;
use crate::render::{BlockContent, BlockRenderer, Renderer, RenderingContext, RenderingOptions};
use crate::text::{MultilineText, TextOverflow, WrappedLines};
use crate::widget::{Control, ControlStyle, Styled};
use std::iter::Peekable;

/// Multi-line text, re-wrapped to the content width
#[derive(Debug, Clone, Default)]
pub struct TextBlock {
    style: ControlStyle,
    text: MultilineText,
    overflow: TextOverflow,
}

impl TextBlock {
    /// Create a text block from a string, split on line breaks
    pub fn new(text: impl Into<MultilineText>) -> Self {
        Self {
            style: ControlStyle::default(),
            text: text.into(),
            overflow: TextOverflow::default(),
        }
    }

    /// Set how long lines are broken
    pub fn overflow(mut self, overflow: TextOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn text(&self) -> &MultilineText {
        &self.text
    }
}

impl Styled for TextBlock {
    fn style_mut(&mut self) -> &mut ControlStyle {
        &mut self.style
    }
}

impl Control for TextBlock {
    fn style(&self) -> &ControlStyle {
        &self.style
    }

    /// Text with no visible characters wraps to zero lines at its natural
    /// width, so it takes no height either
    fn natural_content_size(&self) -> Size {
        let size = self.text.size();
        if size.width == 0 {
            Size::EMPTY
        } else {
            size
        }
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        let content = TextContent {
            text: &self.text,
            overflow: self.overflow,
            lines: None,
        };
        Box::new(BlockRenderer::for_control(self, options, Box::new(content)))
    }
}

struct TextContent<'a> {
    text: &'a MultilineText,
    overflow: TextOverflow,
    lines: Option<Peekable<WrappedLines<'a>>>,
}

impl BlockContent for TextContent<'_> {
    fn initialize(&mut self, ctx: &RenderingContext) {
        let lines = self.text.wrapped_lines(ctx.content_width(), self.overflow);
        self.lines = Some(lines.peekable());
    }

    fn has_more_lines(&mut self) -> bool {
        self.lines
            .as_mut()
            .is_some_and(|lines| lines.peek().is_some())
    }

    fn render_next_line(
        &mut self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
    ) -> Result<()> {
        if let Some(line) = self.lines.as_mut().and_then(Iterator::next) {
            ctx.write(out, &line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{HorizontalAlignment, Thickness};
    use crate::render::render_to_string;

    #[test]
    fn test_renders_lines_padded_to_widest() {
        let block = TextBlock::new("Hello\nWorld!");
        assert_eq!(render_to_string(&block, None).unwrap(), "Hello \nWorld!\n");
    }

    #[test]
    fn test_wraps_to_allocated_width() {
        let block = TextBlock::new("the quick brown fox");
        assert_eq!(
            render_to_string(&block, Some(10)).unwrap(),
            "the quick \nbrown fox \n"
        );
    }

    #[test]
    fn test_cut_char_overflow() {
        let block = TextBlock::new("abcdefgh").overflow(TextOverflow::CutChar);
        assert_eq!(render_to_string(&block, Some(3)).unwrap(), "abc\ndef\ngh \n");
    }

    #[test]
    fn test_margin_padding_and_alignment() {
        let block = TextBlock::new("hi")
            .margin(Thickness::new(0, 1, 0, 0))
            .padding(Thickness::symmetric(0, 1))
            .alignment(HorizontalAlignment::Right);
        assert_eq!(render_to_string(&block, Some(8)).unwrap(), "        \n     hi \n");
    }

    #[test]
    fn test_none_text_renders_nothing() {
        let block = TextBlock::new(MultilineText::none());
        assert_eq!(render_to_string(&block, Some(10)).unwrap(), "");
    }

    #[test]
    fn test_empty_text_has_no_natural_height() {
        let block = TextBlock::new("");
        assert_eq!(block.natural_content_size(), Size::EMPTY);
        assert_eq!(render_to_string(&block, None).unwrap(), "");

        let panel = crate::widget::builtin::StackPanel::new()
            .child(TextBlock::new("a"))
            .child(TextBlock::new("\n"));
        assert_eq!(panel.natural_size(), Size::new(1, 1));
        assert_eq!(render_to_string(&panel, None).unwrap(), "a\n");
    }

    #[test]
    fn test_invisible_renders_nothing() {
        let block = TextBlock::new("hidden").margin(Thickness::uniform(2)).visible(false);
        assert_eq!(render_to_string(&block, Some(10)).unwrap(), "");
        assert_eq!(block.natural_size(), Size::EMPTY);
    }
}
