//! Built-in controls

mod border;
mod content_control;
mod data_grid;
mod frame;
mod horizontal_line;
mod menu;
mod prompt;
mod repeater;
mod stack_panel;
mod text_block;

pub use border::Border;
pub use content_control::ContentControl;
pub use data_grid::{Column, DataGrid};
pub use frame::{BorderType, FrameChars};
pub use horizontal_line::HorizontalLine;
pub use menu::{Menu, MenuItem};
pub use prompt::{Prompt, YesNoQuestion};
pub use repeater::Repeater;
pub use stack_panel::StackPanel;
pub use text_block::TextBlock;
