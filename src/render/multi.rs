//! Sequential composition of renderers

use super::Renderer;
use crate::display::DisplaySink;
use crate::error::{Error, Result};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Uninitialized,
    At(usize),
    Exhausted,
}

/// Concatenates the lines of several renderers
///
/// Renderers that have nothing to output are skipped without producing a
/// blank line. Each renderer is reset when the cursor reaches it. Only
/// `has_more_lines` starts the sequence.
pub struct MultiRenderer<'a> {
    renderers: Vec<Box<dyn Renderer + 'a>>,
    state: State,
    started: bool,
}

impl<'a> MultiRenderer<'a> {
    pub fn new() -> Self {
        Self {
            renderers: Vec::new(),
            state: State::Uninitialized,
            started: false,
        }
    }

    pub fn from_renderers(renderers: Vec<Box<dyn Renderer + 'a>>) -> Self {
        Self {
            renderers,
            ..Self::new()
        }
    }

    /// Append a renderer
    ///
    /// Only allowed before the first line is queried or rendered.
    pub fn add(&mut self, renderer: Box<dyn Renderer + 'a>) -> Result<()> {
        if self.started {
            return Err(Error::RendererAlreadyInitialized);
        }
        self.renderers.push(renderer);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    fn ensure_initialized(&mut self) {
        if self.state == State::Uninitialized {
            self.started = true;
            self.state = self.seek(0);
        }
    }

    /// First renderer at or after `start` that has output
    fn seek(&mut self, start: usize) -> State {
        for (index, renderer) in self.renderers.iter_mut().enumerate().skip(start) {
            renderer.reset();
            if renderer.has_more_lines() {
                trace!(index, "multi-renderer positioned");
                return State::At(index);
            }
            trace!(index, "skipping empty renderer");
        }
        State::Exhausted
    }
}

impl Default for MultiRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MultiRenderer<'_> {
    fn has_more_lines(&mut self) -> bool {
        self.ensure_initialized();
        matches!(self.state, State::At(_))
    }

    fn render_next_line(&mut self, out: &mut dyn DisplaySink) -> Result<()> {
        let index = match self.state {
            State::At(index) => index,
            State::Uninitialized => return Err(Error::NotInitialized),
            State::Exhausted => return Err(Error::NoMoreLines),
        };

        let current = &mut self.renderers[index];
        current.render_next_line(out)?;
        if !current.has_more_lines() {
            self.state = self.seek(index + 1);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.state = State::Uninitialized;
    }
}
