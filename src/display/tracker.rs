//! Sink adaptor that measures what passes through it

use super::DisplaySink;
use crate::style::Color;
use crate::text::{char_width, str_width};
use std::io;

/// Forwards writes to another sink and counts the cells written
///
/// Parents wrap their sink in a tracker while a child renders one line so
/// they can account for the child's output in their own line length.
pub struct LineTracker<'a> {
    inner: &'a mut dyn DisplaySink,
    written: usize,
    lines_ended: usize,
}

impl<'a> LineTracker<'a> {
    pub fn new(inner: &'a mut dyn DisplaySink) -> Self {
        Self {
            inner,
            written: 0,
            lines_ended: 0,
        }
    }

    /// Cells written since the tracker was created
    pub fn written(&self) -> usize {
        self.written
    }

    /// Number of `end_line` calls that passed through
    pub fn lines_ended(&self) -> usize {
        self.lines_ended
    }
}

impl DisplaySink for LineTracker<'_> {
    fn write_str(&mut self, text: &str, fg: Option<Color>, bg: Option<Color>) -> io::Result<()> {
        self.written += str_width(text);
        self.inner.write_str(text, fg, bg)
    }

    fn write_char(&mut self, c: char, fg: Option<Color>, bg: Option<Color>) -> io::Result<()> {
        self.written += char_width(c);
        self.inner.write_char(c, fg, bg)
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.lines_ended += 1;
        self.inner.end_line()
    }

    fn input_line_ended(&mut self) -> io::Result<()> {
        self.lines_ended += 1;
        self.inner.input_line_ended()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    fn max_width(&self) -> Option<usize> {
        self.inner.max_width()
    }

    fn is_new_line(&self) -> bool {
        self.inner.is_new_line()
    }
}
