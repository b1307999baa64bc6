//! Multi-line text values and width-constrained re-wrapping

use super::width::{char_width, str_width};
use crate::geometry::Size;
use std::collections::VecDeque;

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// How a logical line longer than the available width is broken up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TextOverflow {
    /// Slice into chunks of exactly the available width
    CutChar,
    /// Greedy word wrap, hard-splitting words that alone exceed the width
    #[default]
    WrapWord,
}

/// Text split into display lines
///
/// A value built from `None` has no lines at all; the empty string has one
/// empty line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultilineText {
    raw: Option<String>,
    lines: Vec<String>,
}

impl MultilineText {
    /// Split `text` on `\r\n`, `\r` or `\n`
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let lines = split_lines(&raw);
        Self {
            raw: Some(raw),
            lines,
        }
    }

    /// Text with no lines and no raw value
    pub fn none() -> Self {
        Self::default()
    }

    /// Use each item as one line verbatim
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            raw: Some(lines.join(LINE_SEPARATOR)),
            lines,
        }
    }

    /// The text this value was built from
    pub fn raw_text(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Stored lines, unwrapped
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest stored line
    pub fn max_line_width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| str_width(line))
            .max()
            .unwrap_or(0)
    }

    /// Size with no width limit
    pub fn size(&self) -> Size {
        Size::new(self.max_line_width(), self.line_count())
    }

    /// Size of the display lines produced by [`wrapped_lines`](Self::wrapped_lines)
    pub fn calculate_size(&self, max_width: usize, overflow: TextOverflow) -> Size {
        if max_width == 0 || self.lines.is_empty() {
            return Size::EMPTY;
        }

        self.wrapped_lines(max_width, overflow)
            .fold(Size::EMPTY, |size, line| {
                Size::new(size.width.max(str_width(&line)), size.height + 1)
            })
    }

    /// Lazily re-wrap the stored lines to `max_width`
    ///
    /// Each call starts from the first line; a width of zero yields nothing.
    pub fn wrapped_lines(&self, max_width: usize, overflow: TextOverflow) -> WrappedLines<'_> {
        WrappedLines {
            lines: self.lines.iter(),
            max_width,
            overflow,
            pending: VecDeque::new(),
        }
    }
}

impl From<&str> for MultilineText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MultilineText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<S: Into<String>> From<Option<S>> for MultilineText {
    fn from(text: Option<S>) -> Self {
        text.map(Self::new).unwrap_or_default()
    }
}

/// Iterator returned by [`MultilineText::wrapped_lines`]
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    lines: std::slice::Iter<'a, String>,
    max_width: usize,
    overflow: TextOverflow,
    pending: VecDeque<String>,
}

impl Iterator for WrappedLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.max_width == 0 {
            return None;
        }

        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(line);
            }
            let logical = self.lines.next()?;
            let pieces = match self.overflow {
                TextOverflow::CutChar => cut_chars(logical, self.max_width),
                TextOverflow::WrapWord => wrap_words(logical, self.max_width),
            };
            self.pending.extend(pieces);
        }
    }
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    lines.push(current);
    lines
}

fn cut_chars(line: &str, max_width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for c in line.chars() {
        let w = char_width(c);
        if current_width + w > max_width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn wrap_words(line: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split(' ').filter(|word| !word.is_empty()) {
        let word_width = str_width(word);

        if !current.is_empty() {
            if current_width + 1 + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }
            result.push(std::mem::take(&mut current));
        }

        if word_width <= max_width {
            current = word.to_string();
            current_width = word_width;
        } else {
            // Word too long, break it
            let mut pieces = cut_chars(word, max_width);
            current = pieces.pop().unwrap_or_default();
            current_width = str_width(&current);
            result.extend(pieces);
        }
    }

    if !current.is_empty() || result.is_empty() {
        result.push(current);
    }
    result
}
