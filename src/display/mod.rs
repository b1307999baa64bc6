//! Line-oriented output sinks

mod stream;
mod string;
mod terminal;
mod tracker;

pub use stream::StreamDisplay;
pub use string::StringDisplay;
pub use terminal::TerminalDisplay;
pub use tracker::LineTracker;

use crate::style::Color;
use std::io;

/// Destination for rendered lines
///
/// Sinks accept colored text runs and explicit line ends. Colors are hints:
/// sinks without color support ignore them.
pub trait DisplaySink {
    /// Append text to the current line
    fn write_str(&mut self, text: &str, fg: Option<Color>, bg: Option<Color>) -> io::Result<()>;

    /// Append a single character to the current line
    fn write_char(&mut self, c: char, fg: Option<Color>, bg: Option<Color>) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf), fg, bg)
    }

    /// Terminate the current line
    fn end_line(&mut self) -> io::Result<()>;

    /// Note that echoed user input finished the current line
    ///
    /// Terminals move to the next line themselves when Enter is pressed;
    /// other sinks terminate the line.
    fn input_line_ended(&mut self) -> io::Result<()> {
        self.end_line()
    }

    /// Push buffered output to the underlying device
    fn flush(&mut self) -> io::Result<()>;

    /// Natural width limit of the sink, `None` when unconstrained
    fn max_width(&self) -> Option<usize>;

    /// Whether the cursor sits at the start of a line
    fn is_new_line(&self) -> bool;
}
