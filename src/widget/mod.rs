//! Controls and their contract with the layout and rendering core

pub mod builtin;
mod close;
mod control;

pub use close::CloseSignal;
pub use control::{Control, ControlStyle, Styled};
