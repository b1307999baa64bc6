//! Sink over any `io::Write`

use super::DisplaySink;
use crate::style::Color;
use std::io::{self, Write};

/// Writes plain text to a stream, ignoring colors
pub struct StreamDisplay<W: Write> {
    writer: W,
    at_line_start: bool,
}

impl<W: Write> StreamDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            at_line_start: true,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for StreamDisplay<W> {
    fn write_str(&mut self, text: &str, _fg: Option<Color>, _bg: Option<Color>) -> io::Result<()> {
        if !text.is_empty() {
            self.writer.write_all(text.as_bytes())?;
            self.at_line_start = false;
        }
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")?;
        self.at_line_start = true;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn max_width(&self) -> Option<usize> {
        None
    }

    fn is_new_line(&self) -> bool {
        self.at_line_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_display_writes_bytes() {
        let mut out = StreamDisplay::new(Vec::new());
        out.write_str("héllo", Some(Color::Blue), Some(Color::White))
            .unwrap();
        out.end_line().unwrap();
        out.flush().unwrap();

        assert_eq!(out.max_width(), None);
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "héllo\n");
    }
}
