//! Text measurement and multi-line wrapping

mod multiline;
mod width;

pub use multiline::{MultilineText, TextOverflow, WrappedLines};
pub use width::{char_width, str_width, truncate, truncate_with_ellipsis};
