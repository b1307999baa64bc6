//! Frame character sets

/// Border type for framed controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    /// Blank frame that still takes up one cell on each side
    None,
    /// Single line border (─ │ ┌ ┐ └ ┘)
    #[default]
    Single,
    /// Double line border (═ ║ ╔ ╗ ╚ ╝)
    Double,
    /// Rounded corners (─ │ ╭ ╮ ╰ ╯)
    Rounded,
    /// Heavy/thick border (━ ┃ ┏ ┓ ┗ ┛)
    Heavy,
}

/// Characters used to draw a frame or a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    /// ┬
    pub top_tee: char,
    /// ┴
    pub bottom_tee: char,
    /// ├
    pub left_tee: char,
    /// ┤
    pub right_tee: char,
    /// ┼
    pub cross: char,
}

impl BorderType {
    /// Get the frame characters for this type
    pub fn chars(&self) -> FrameChars {
        match self {
            BorderType::None => FrameChars {
                horizontal: ' ',
                vertical: ' ',
                top_left: ' ',
                top_right: ' ',
                bottom_left: ' ',
                bottom_right: ' ',
                top_tee: ' ',
                bottom_tee: ' ',
                left_tee: ' ',
                right_tee: ' ',
                cross: ' ',
            },
            BorderType::Single => FrameChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                top_tee: '┬',
                bottom_tee: '┴',
                left_tee: '├',
                right_tee: '┤',
                cross: '┼',
            },
            BorderType::Double => FrameChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                top_tee: '╦',
                bottom_tee: '╩',
                left_tee: '╠',
                right_tee: '╣',
                cross: '╬',
            },
            BorderType::Rounded => FrameChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                ..BorderType::Single.chars()
            },
            BorderType::Heavy => FrameChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                top_tee: '┳',
                bottom_tee: '┻',
                left_tee: '┣',
                right_tee: '┫',
                cross: '╋',
            },
        }
    }
}
