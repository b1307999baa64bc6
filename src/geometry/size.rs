//! Size with width and height

use std::ops::{Add, Sub};

/// Size representing width and height in character cells
///
/// Subtraction saturates at zero, so layout arithmetic never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    /// The additive identity
    pub const EMPTY: Size = Size::new(0, 0);

    /// Width used for "no constraint"
    ///
    /// Kept well below `usize::MAX` so that adding margins and paddings to it
    /// cannot overflow.
    pub const UNBOUNDED_WIDTH: usize = usize::MAX >> 2;

    /// Create a new size
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Create a size with the given width and zero height
    pub const fn with_width(width: usize) -> Self {
        Self { width, height: 0 }
    }

    /// Check if the size is empty (zero area)
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if the width is the unbounded sentinel
    pub const fn is_unbounded(&self) -> bool {
        self.width >= Self::UNBOUNDED_WIDTH
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(
            self.width.saturating_add(rhs.width),
            self.height.saturating_add(rhs.height),
        )
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(
            self.width.saturating_sub(rhs.width),
            self.height.saturating_sub(rhs.height),
        )
    }
}

impl From<(usize, usize)> for Size {
    fn from((width, height): (usize, usize)) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_creation() {
        let s = Size::new(80, 24);
        assert_eq!(s.width, 80);
        assert_eq!(s.height, 24);
    }

    #[test]
    fn test_size_empty() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(Size::EMPTY.is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn test_empty_is_additive_identity() {
        let s = Size::new(7, 3);
        assert_eq!(s + Size::EMPTY, s);
        assert_eq!(Size::EMPTY + s, s);
    }

    #[test]
    fn test_sub_clamps_each_dimension() {
        let s = Size::new(5, 2) - Size::new(3, 9);
        assert_eq!(s, Size::new(2, 0));
    }

    #[test]
    fn test_unbounded_survives_addition() {
        let s = Size::with_width(Size::UNBOUNDED_WIDTH) + Size::new(100, 100);
        assert!(s.is_unbounded());
    }
}
