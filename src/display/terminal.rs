//! Live terminal sink built on crossterm

use super::DisplaySink;
use crate::style::Color;
use crossterm::{
    cursor::{Hide, Show},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use std::io::{self, Stdout, Write};

/// Colored output to the process's standard output
pub struct TerminalDisplay {
    stdout: Stdout,
    /// Usable columns, one less than the buffer width so that a full line
    /// never triggers the terminal's own wrap
    width: Option<usize>,
    at_line_start: bool,
    cursor_hidden: bool,
}

impl TerminalDisplay {
    /// Create a sink for the current terminal
    ///
    /// When the size cannot be queried (output redirected) the sink is
    /// unconstrained.
    pub fn new() -> Self {
        let width = terminal::size()
            .ok()
            .map(|(columns, _)| (columns as usize).saturating_sub(1));
        Self {
            stdout: io::stdout(),
            width,
            at_line_start: true,
            cursor_hidden: false,
        }
    }

    /// Refresh the width from the terminal (call after a resize)
    pub fn refresh_size(&mut self) -> io::Result<()> {
        let (columns, _) = terminal::size()?;
        self.width = Some((columns as usize).saturating_sub(1));
        Ok(())
    }

    /// Set cursor visibility
    pub fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(self.stdout, Show)?;
        } else {
            execute!(self.stdout, Hide)?;
        }
        self.cursor_hidden = !visible;
        Ok(())
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for TerminalDisplay {
    fn write_str(&mut self, text: &str, fg: Option<Color>, bg: Option<Color>) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        if let Some(fg) = fg {
            queue!(self.stdout, SetForegroundColor(fg.into()))?;
        }
        if let Some(bg) = bg {
            queue!(self.stdout, SetBackgroundColor(bg.into()))?;
        }
        queue!(self.stdout, Print(text))?;
        if fg.is_some() || bg.is_some() {
            queue!(self.stdout, ResetColor)?;
        }

        self.at_line_start = false;
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        queue!(self.stdout, Print('\n'))?;
        self.at_line_start = true;
        Ok(())
    }

    fn input_line_ended(&mut self) -> io::Result<()> {
        self.at_line_start = true;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn max_width(&self) -> Option<usize> {
        self.width
    }

    fn is_new_line(&self) -> bool {
        self.at_line_start
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        // Best effort cleanup - ignore errors during drop
        if self.cursor_hidden {
            let _ = execute!(self.stdout, Show);
        }
        let _ = self.stdout.flush();
    }
}
