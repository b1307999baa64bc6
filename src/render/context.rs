//! Per-control line assembly

use super::{Renderer, RenderingOptions};
use crate::display::{DisplaySink, LineTracker};
use crate::error::Result;
use crate::layout::ControlLayout;
use crate::style::Color;
use crate::text::{char_width, truncate};
use crate::widget::Control;
use tracing::trace;

/// Turns content writes into lines of exactly the laid-out width
///
/// Each line is framed by the computed empty space, margin and padding.
/// Content beyond the content width is dropped; content shorter than it is
/// padded with spaces when the line ends. A child context (not root) leaves
/// out the right margin, the right empty space and the line terminator so
/// its parent can finish the line.
#[derive(Debug, Clone)]
pub struct RenderingContext {
    layout: ControlLayout,
    options: RenderingOptions,
    foreground: Option<Color>,
    background: Option<Color>,
    /// Content cells written on the current line
    current_length: usize,
    line_in_progress: bool,
    lines_rendered: usize,
}

impl RenderingContext {
    pub fn new(
        layout: ControlLayout,
        options: RenderingOptions,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> Self {
        Self {
            layout,
            options,
            foreground,
            background,
            current_length: 0,
            line_in_progress: false,
            lines_rendered: 0,
        }
    }

    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    pub fn options(&self) -> &RenderingOptions {
        &self.options
    }

    pub fn is_root(&self) -> bool {
        self.options.is_root
    }

    /// Width available to content on every line
    pub fn content_width(&self) -> usize {
        self.layout.content_size().width
    }

    /// Content cells still writable on the current line
    pub fn remaining_width(&self) -> usize {
        self.content_width().saturating_sub(self.current_length)
    }

    /// Content cells written on the current line
    pub fn current_length(&self) -> usize {
        self.current_length
    }

    /// Lines completed by this context, margin lines included
    pub fn lines_rendered(&self) -> usize {
        self.lines_rendered
    }

    pub fn is_line_in_progress(&self) -> bool {
        self.line_in_progress
    }

    /// Default foreground for content
    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    /// Background behind content and padding
    pub fn content_background(&self) -> Option<Color> {
        self.background.or(self.options.parent_background)
    }

    /// Background behind margins and empty space
    pub fn outer_background(&self) -> Option<Color> {
        self.options.parent_background
    }

    /// Start a line, ending any line still in progress
    pub fn begin_line(&mut self, out: &mut dyn DisplaySink) -> Result<()> {
        if self.line_in_progress {
            self.end_line(out)?;
        }

        let outer = self.outer_background();
        let inner = self.content_background();
        let margin = self.layout.margin();
        let padding = self.layout.padding();

        write_spaces(out, self.layout.empty_left() + margin.left, outer)?;
        write_spaces(out, padding.left, inner)?;

        self.current_length = 0;
        self.line_in_progress = true;
        Ok(())
    }

    /// Append text in the default foreground
    pub fn write(&mut self, out: &mut dyn DisplaySink, text: &str) -> Result<()> {
        self.write_colored(out, text, self.foreground, self.content_background())
    }

    /// Append text, dropping whatever does not fit in the content width
    ///
    /// Starts a line if none is in progress.
    pub fn write_colored(
        &mut self,
        out: &mut dyn DisplaySink,
        text: &str,
        fg: Option<Color>,
        bg: Option<Color>,
    ) -> Result<()> {
        if !self.line_in_progress {
            self.begin_line(out)?;
        }

        let (visible, width) = truncate(text, self.remaining_width());
        if !visible.is_empty() {
            out.write_str(visible, fg, bg)?;
            self.current_length += width;
        }
        Ok(())
    }

    /// Append a character, dropping it if it does not fit
    pub fn write_char(
        &mut self,
        out: &mut dyn DisplaySink,
        c: char,
        fg: Option<Color>,
        bg: Option<Color>,
    ) -> Result<()> {
        if !self.line_in_progress {
            self.begin_line(out)?;
        }

        let width = char_width(c);
        if width <= self.remaining_width() {
            out.write_char(c, fg, bg)?;
            self.current_length += width;
        }
        Ok(())
    }

    /// Pad the current line with spaces up to content column `column`
    pub fn fill_to(&mut self, out: &mut dyn DisplaySink, column: usize) -> Result<()> {
        let target = column.min(self.content_width());
        if target > self.current_length {
            write_spaces(out, target - self.current_length, self.content_background())?;
            self.current_length = target;
        }
        Ok(())
    }

    /// Fill the rest of the content, write the right-hand spacing and close
    /// the line
    pub fn end_line(&mut self, out: &mut dyn DisplaySink) -> Result<()> {
        if !self.line_in_progress {
            self.begin_line(out)?;
        }

        let content_width = self.content_width();
        self.fill_to(out, content_width)?;
        write_spaces(out, self.layout.padding().right, self.content_background())?;

        if self.options.is_root {
            let outer = self.layout.margin().right + self.layout.empty_right();
            write_spaces(out, outer, self.outer_background())?;
            out.end_line()?;
        }

        self.line_in_progress = false;
        self.lines_rendered += 1;
        trace!(line = self.lines_rendered, root = self.options.is_root, "line ended");
        Ok(())
    }

    /// `begin_line`, `write`, `end_line` in one call
    pub fn write_line(&mut self, out: &mut dyn DisplaySink, text: &str) -> Result<()> {
        self.begin_line(out)?;
        self.write(out, text)?;
        self.end_line(out)
    }

    /// Write a line made only of margin, in the parent's background
    pub fn write_margin_line(&mut self, out: &mut dyn DisplaySink) -> Result<()> {
        if self.line_in_progress {
            self.end_line(out)?;
        }

        if self.options.is_root {
            write_spaces(out, self.layout.full_width(), self.outer_background())?;
            out.end_line()?;
        } else {
            write_spaces(out, self.layout.child_line_width(), self.outer_background())?;
        }
        self.lines_rendered += 1;
        Ok(())
    }

    /// Options for a nested control given `available_width` cells
    pub fn child_options(&self, available_width: usize) -> RenderingOptions {
        RenderingOptions::child(available_width, self.content_background())
    }

    /// Create a renderer for a nested control
    pub fn create_child_renderer<'a>(
        &self,
        child: &'a dyn Control,
        available_width: usize,
    ) -> Box<dyn Renderer + 'a> {
        child.create_renderer(self.child_options(available_width))
    }

    /// Render one line of a nested control into the current line
    ///
    /// The cells the child writes count towards this line's length.
    pub fn render_child_line(
        &mut self,
        child: &mut dyn Renderer,
        out: &mut dyn DisplaySink,
    ) -> Result<()> {
        if !self.line_in_progress {
            self.begin_line(out)?;
        }

        let mut tracker = LineTracker::new(out);
        child.render_next_line(&mut tracker)?;
        self.current_length += tracker.written();
        Ok(())
    }
}

fn write_spaces(out: &mut dyn DisplaySink, count: usize, bg: Option<Color>) -> Result<()> {
    if count > 0 {
        out.write_str(&" ".repeat(count), None, bg)?;
    }
    Ok(())
}
