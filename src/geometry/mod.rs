//! Geometry primitives for character-cell layout

mod alignment;
mod size;
mod thickness;

pub use alignment::{Alignment, HorizontalAlignment};
pub use size::Size;
pub use thickness::Thickness;
