//! In-memory sink

use super::DisplaySink;
use crate::style::Color;
use std::io;

/// Collects rendered output in a `String`, ignoring colors
///
/// Lines are terminated with `\n`.
#[derive(Debug, Clone)]
pub struct StringDisplay {
    buffer: String,
    max_width: Option<usize>,
    at_line_start: bool,
}

impl StringDisplay {
    /// Unconstrained sink
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            max_width: None,
            at_line_start: true,
        }
    }

    /// Sink that reports `width` as its natural width
    pub fn with_width(width: usize) -> Self {
        Self {
            max_width: Some(width),
            ..Self::new()
        }
    }

    /// Everything written so far
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Completed lines, without terminators
    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines().collect()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Default for StringDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for StringDisplay {
    fn write_str(&mut self, text: &str, _fg: Option<Color>, _bg: Option<Color>) -> io::Result<()> {
        if !text.is_empty() {
            self.buffer.push_str(text);
            self.at_line_start = false;
        }
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.buffer.push('\n');
        self.at_line_start = true;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn max_width(&self) -> Option<usize> {
        self.max_width
    }

    fn is_new_line(&self) -> bool {
        self.at_line_start
    }
}
