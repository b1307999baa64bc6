//! Border widget with optional title and nested content

use super::frame::{BorderType, FrameChars};
use crate::display::DisplaySink;
use crate::error::Result;
use crate::geometry::Size;
use crate::render::{BlockContent, BlockRenderer, Renderer, RenderingContext, RenderingOptions};
use crate::style::{Color, Theme};
use crate::text::{str_width, truncate_with_ellipsis};
use crate::widget::{Control, ControlStyle, Styled};

/// Frame drawn around a nested control
///
/// The frame takes one cell on each side of the content area; the child is
/// allocated what remains.
#[derive(Default)]
pub struct Border {
    style: ControlStyle,
    content: Option<Box<dyn Control>>,
    border_type: BorderType,
    border_color: Option<Color>,
    title: Option<String>,
    title_color: Option<Color>,
}

impl Border {
    /// Create an empty single-line border
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a border colored from `theme`
    pub fn themed(theme: &Theme) -> Self {
        Self {
            border_color: Some(theme.border),
            title_color: Some(theme.emphasized),
            ..Self::default()
        }
    }

    /// Set the nested control
    pub fn content(mut self, content: impl Control + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    /// Set the border type
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Set the frame color
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set the title shown in the top frame line
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    fn top_line(&self, chars: &FrameChars, inner_width: usize) -> (String, String, String) {
        let fill = |width: usize| chars.horizontal.to_string().repeat(width);
        match &self.title {
            Some(title) if inner_width > 2 => {
                let label = truncate_with_ellipsis(title, inner_width - 2);
                let label_width = str_width(&label);
                (fill(1), label, fill(inner_width - 1 - label_width))
            }
            _ => (fill(inner_width), String::new(), String::new()),
        }
    }
}

impl Styled for Border {
    fn style_mut(&mut self) -> &mut ControlStyle {
        &mut self.style
    }
}

impl Control for Border {
    fn style(&self) -> &ControlStyle {
        &self.style
    }

    fn natural_content_size(&self) -> Size {
        let inner = self
            .content
            .as_ref()
            .map(|content| content.natural_size())
            .unwrap_or(Size::EMPTY);
        let title_width = self.title.as_deref().map(|title| str_width(title) + 2).unwrap_or(0);
        Size::new(inner.width.max(title_width) + 2, inner.height + 2)
    }

    fn create_renderer<'a>(&'a self, options: RenderingOptions) -> Box<dyn Renderer + 'a> {
        let content = FrameContent {
            border: self,
            child: None,
            row: Row::Top,
        };
        Box::new(BlockRenderer::for_control(self, options, Box::new(content)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Top,
    Inner,
    Bottom,
    Done,
}

struct FrameContent<'a> {
    border: &'a Border,
    child: Option<Box<dyn Renderer + 'a>>,
    row: Row,
}

impl FrameContent<'_> {
    fn child_has_lines(&mut self) -> bool {
        self.child
            .as_mut()
            .is_some_and(|child| child.has_more_lines())
    }
}

impl BlockContent for FrameContent<'_> {
    fn initialize(&mut self, ctx: &RenderingContext) {
        let inner_width = ctx.content_width().saturating_sub(2);
        self.child = self
            .border
            .content
            .as_deref()
            .map(|content| ctx.create_child_renderer(content, inner_width));
        self.row = Row::Top;
    }

    fn has_more_lines(&mut self) -> bool {
        self.row != Row::Done
    }

    fn render_next_line(
        &mut self,
        ctx: &mut RenderingContext,
        out: &mut dyn DisplaySink,
    ) -> Result<()> {
        let chars = self.border.border_type.chars();
        let frame_color = self.border.border_color.or(ctx.foreground());
        let bg = ctx.content_background();
        let inner_width = ctx.content_width().saturating_sub(2);

        match self.row {
            Row::Top => {
                let (head, title, tail) = self.border.top_line(&chars, inner_width);
                let title_color = self.border.title_color.or(frame_color);
                ctx.write_char(out, chars.top_left, frame_color, bg)?;
                ctx.write_colored(out, &head, frame_color, bg)?;
                ctx.write_colored(out, &title, title_color, bg)?;
                ctx.write_colored(out, &tail, frame_color, bg)?;
                ctx.write_char(out, chars.top_right, frame_color, bg)?;
                self.row = if self.child_has_lines() {
                    Row::Inner
                } else {
                    Row::Bottom
                };
            }
            Row::Inner => {
                ctx.write_char(out, chars.vertical, frame_color, bg)?;
                if let Some(child) = self.child.as_mut() {
                    ctx.render_child_line(child.as_mut(), out)?;
                }
                ctx.fill_to(out, 1 + inner_width)?;
                ctx.write_char(out, chars.vertical, frame_color, bg)?;
                if !self.child_has_lines() {
                    self.row = Row::Bottom;
                }
            }
            Row::Bottom => {
                let fill = chars.horizontal.to_string().repeat(inner_width);
                ctx.write_char(out, chars.bottom_left, frame_color, bg)?;
                ctx.write_colored(out, &fill, frame_color, bg)?;
                ctx.write_char(out, chars.bottom_right, frame_color, bg)?;
                self.row = Row::Done;
            }
            Row::Done => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{HorizontalAlignment, Thickness};
    use crate::render::render_to_string;
    use crate::widget::builtin::TextBlock;

    #[test]
    fn test_border_around_text() {
        let border = Border::new().content(TextBlock::new("Hi\nthere"));
        assert_eq!(
            render_to_string(&border, None).unwrap(),
            "┌─────┐\n│Hi   │\n│there│\n└─────┘\n"
        );
    }

    #[test]
    fn test_empty_border() {
        let border = Border::new().border_type(BorderType::Double);
        assert_eq!(render_to_string(&border, None).unwrap(), "╔╗\n╚╝\n");
    }

    #[test]
    fn test_stretched_border_aligns_child() {
        let border = Border::new()
            .alignment(HorizontalAlignment::Stretch)
            .content(TextBlock::new("ab").alignment(HorizontalAlignment::Center));
        assert_eq!(
            render_to_string(&border, Some(8)).unwrap(),
            "┌──────┐\n│  ab  │\n└──────┘\n"
        );
    }

    #[test]
    fn test_padding_inside_frame_belongs_to_child() {
        let border = Border::new()
            .border_type(BorderType::Rounded)
            .content(TextBlock::new("x").padding(Thickness::uniform(1)));
        assert_eq!(
            render_to_string(&border, None).unwrap(),
            "╭───╮\n│   │\n│ x │\n│   │\n╰───╯\n"
        );
    }

    #[test]
    fn test_title_in_top_frame() {
        let border = Border::new().title("Log").content(TextBlock::new("0123456"));
        assert_eq!(
            render_to_string(&border, None).unwrap(),
            "┌─Log───┐\n│0123456│\n└───────┘\n"
        );
    }

    #[test]
    fn test_hidden_child_leaves_frame_only() {
        let border = Border::new().content(TextBlock::new("gone").visible(false));
        assert_eq!(render_to_string(&border, None).unwrap(), "┌┐\n└┘\n");
    }
}
