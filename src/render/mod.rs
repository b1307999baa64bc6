//! Pull-based, line-at-a-time rendering
//!
//! Every control produces a [`Renderer`] that writes one display line per
//! call. Composite controls build their renderers out of smaller ones with
//! [`MultiRenderer`] and [`BlockRenderer`], and render nested controls
//! through child renderers created from their [`RenderingContext`].

mod block;
mod context;
mod multi;

pub use block::{BlockContent, BlockRenderer};
pub use context::RenderingContext;
pub use multi::MultiRenderer;

use crate::display::{DisplaySink, StringDisplay};
use crate::error::Result;
use crate::style::Color;
use crate::widget::Control;
use tracing::debug;

/// Produces a control's output one line at a time
pub trait Renderer {
    /// Whether another call to [`render_next_line`](Self::render_next_line)
    /// will produce output
    fn has_more_lines(&mut self) -> bool;

    /// Write the next line to `out`
    ///
    /// `has_more_lines` must have been queried since creation or the last
    /// reset. Fails with [`Error::NoMoreLines`](crate::Error::NoMoreLines)
    /// when the renderer is exhausted.
    fn render_next_line(&mut self, out: &mut dyn DisplaySink) -> Result<()>;

    /// Rewind so the output can be produced again from the first line
    fn reset(&mut self);
}

/// How a renderer is placed in the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderingOptions {
    /// Width granted by the parent or the sink
    pub allocated_width: Option<usize>,
    /// Root renderers end their own lines; child renderers leave that to
    /// the parent
    pub is_root: bool,
    /// Background used for margins and empty space
    pub parent_background: Option<Color>,
}

impl RenderingOptions {
    /// Options for the outermost control
    pub fn root(allocated_width: Option<usize>) -> Self {
        Self {
            allocated_width,
            is_root: true,
            parent_background: None,
        }
    }

    /// Options for a control nested in a parent's line
    pub fn child(allocated_width: usize, parent_background: Option<Color>) -> Self {
        Self {
            allocated_width: Some(allocated_width),
            is_root: false,
            parent_background,
        }
    }
}

/// Render `control` as a root control to `out` and flush
///
/// The sink's natural width becomes the allocated width.
pub fn render(control: &dyn Control, out: &mut dyn DisplaySink) -> Result<()> {
    if !out.is_new_line() {
        out.end_line()?;
    }

    let mut renderer = control.create_renderer(RenderingOptions::root(out.max_width()));
    let mut lines = 0usize;
    while renderer.has_more_lines() {
        renderer.render_next_line(out)?;
        lines += 1;
    }
    out.flush()?;

    debug!(lines, "rendered control");
    Ok(())
}

/// Render `control` into a string, one `\n`-terminated line per display line
pub fn render_to_string(control: &dyn Control, width: Option<usize>) -> Result<String> {
    let mut out = match width {
        Some(width) => StringDisplay::with_width(width),
        None => StringDisplay::new(),
    };
    render(control, &mut out)?;
    Ok(out.into_string())
}
