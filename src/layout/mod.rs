//! Box-model layout for a single control

mod control_layout;

pub use control_layout::{ControlLayout, LayoutRequest};
