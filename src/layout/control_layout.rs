//! Margin, padding, content and alignment computation

use crate::geometry::{Alignment, HorizontalAlignment, Size, Thickness};
use tracing::debug;

/// Everything the layout of one control depends on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRequest {
    /// Configured margin
    pub margin: Thickness,
    /// Configured padding
    pub padding: Thickness,
    /// Configured alignment, possibly `Default`
    pub alignment: HorizontalAlignment,
    /// Alignment used when `alignment` is `Default`
    pub default_alignment: HorizontalAlignment,
    /// Explicit content width, overriding the natural width
    pub width: Option<usize>,
    /// Upper bound on the full width (margin and padding included)
    pub max_width: Option<usize>,
    /// Content size with no external constraint
    pub natural_size: Size,
    /// Width granted by the parent, `None` when unconstrained
    pub allocated_width: Option<usize>,
    /// Height granted by the parent, `None` when unconstrained
    pub allocated_height: Option<usize>,
}

/// Computed box model of a control for one render pass
///
/// Horizontally a line is laid out as: left empty space, left margin, left
/// padding, content, right padding, right margin, right empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLayout {
    allocated_width: Option<usize>,
    alignment: Alignment,
    margin: Thickness,
    padding: Thickness,
    content_size: Size,
    empty_left: usize,
    empty_right: usize,
}

impl ControlLayout {
    /// Run the layout algorithm
    ///
    /// Never fails: sizes that do not fit are clamped down to zero.
    pub fn calculate(request: &LayoutRequest) -> Self {
        let max_allowed = match (request.allocated_width, request.max_width) {
            (Some(allocated), Some(max)) => allocated.min(max),
            (Some(allocated), None) => allocated,
            (None, Some(max)) => max,
            (None, None) => Size::UNBOUNDED_WIDTH,
        };

        let margin = clamp_horizontal(request.margin, max_allowed);
        let padding = clamp_horizontal(request.padding, max_allowed - margin.horizontal());
        let remaining = max_allowed - margin.horizontal() - padding.horizontal();

        let alignment = request.alignment.resolve(request.default_alignment);

        let content_width = match (alignment, request.allocated_width) {
            (Alignment::Stretch, Some(_)) => remaining,
            _ => request
                .width
                .unwrap_or(request.natural_size.width)
                .min(remaining),
        };
        let content_height = match request.allocated_height {
            Some(height) => request
                .natural_size
                .height
                .min(height.saturating_sub(margin.vertical() + padding.vertical())),
            None => request.natural_size.height,
        };
        let content_size = Size::new(content_width, content_height);

        let (empty_left, empty_right) = match request.allocated_width {
            Some(allocated) => {
                let used = margin.horizontal() + padding.horizontal() + content_width;
                let diff = allocated.saturating_sub(used);
                match alignment {
                    Alignment::Left => (0, diff),
                    Alignment::Center => (diff / 2, diff - diff / 2),
                    Alignment::Right => (diff, 0),
                    Alignment::Stretch => (0, 0),
                }
            }
            None => (0, 0),
        };

        let layout = Self {
            allocated_width: request.allocated_width,
            alignment,
            margin,
            padding,
            content_size,
            empty_left,
            empty_right,
        };
        debug!(
            allocated = ?request.allocated_width,
            natural = request.natural_size.width,
            content = content_width,
            full = layout.full_width(),
            ?alignment,
            "calculated control layout"
        );
        layout
    }

    /// Width the parent granted, if any
    pub fn allocated_width(&self) -> Option<usize> {
        self.allocated_width
    }

    /// Resolved alignment
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Margin after clamping
    pub fn margin(&self) -> Thickness {
        self.margin
    }

    /// Padding after clamping
    pub fn padding(&self) -> Thickness {
        self.padding
    }

    /// Inner area excluding margin and padding
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Leftover width placed before the margin
    pub fn empty_left(&self) -> usize {
        self.empty_left
    }

    /// Leftover width placed after the margin
    pub fn empty_right(&self) -> usize {
        self.empty_right
    }

    /// Column at which content starts
    pub fn content_offset(&self) -> usize {
        self.empty_left + self.margin.left + self.padding.left
    }

    /// Content, padding, margin and empty space combined
    pub fn full_width(&self) -> usize {
        self.empty_left
            + self.margin.horizontal()
            + self.padding.horizontal()
            + self.content_size.width
            + self.empty_right
    }

    /// Full width without the right margin and right empty space
    ///
    /// This is what a control rendered inside a parent writes per line; the
    /// parent fills the rest of its own line.
    pub fn child_line_width(&self) -> usize {
        self.full_width() - self.margin.right - self.empty_right
    }

    /// Number of lines including vertical margin and padding
    pub fn full_height(&self) -> usize {
        self.margin.vertical() + self.padding.vertical() + self.content_size.height
    }
}

fn clamp_horizontal(thickness: Thickness, available: usize) -> Thickness {
    let left = thickness.left.min(available);
    let right = thickness.right.min(available - left);
    Thickness::new(left, thickness.top, right, thickness.bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(natural: usize, allocated: Option<usize>, alignment: HorizontalAlignment) -> LayoutRequest {
        LayoutRequest {
            alignment,
            natural_size: Size::new(natural, 1),
            allocated_width: allocated,
            ..Default::default()
        }
    }

    #[test]
    fn test_simple_label_centered() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            margin: "0 1".parse().unwrap(),
            ..request(10, Some(20), HorizontalAlignment::Center)
        });

        assert_eq!(layout.margin(), Thickness::new(1, 0, 1, 0));
        assert_eq!(layout.content_size().width, 10);
        assert_eq!(layout.empty_left(), 4);
        assert_eq!(layout.empty_right(), 4);
        assert_eq!(layout.content_offset(), 5);
        assert_eq!(layout.full_width(), 20);
    }

    #[test]
    fn test_center_split_biases_right() {
        for allocated in 0..40 {
            let layout =
                ControlLayout::calculate(&request(7, Some(allocated), HorizontalAlignment::Center));
            let diff = allocated.saturating_sub(7);
            assert_eq!(layout.empty_left(), diff / 2);
            assert_eq!(layout.empty_right(), (diff + 1) / 2);
        }
    }

    #[test]
    fn test_left_and_right_alignment() {
        let left = ControlLayout::calculate(&request(5, Some(12), HorizontalAlignment::Left));
        assert_eq!((left.empty_left(), left.empty_right()), (0, 7));

        let right = ControlLayout::calculate(&request(5, Some(12), HorizontalAlignment::Right));
        assert_eq!((right.empty_left(), right.empty_right()), (7, 0));
    }

    #[test]
    fn test_default_alignment_resolves_to_fallback() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            default_alignment: HorizontalAlignment::Right,
            ..request(5, Some(12), HorizontalAlignment::Default)
        });
        assert_eq!(layout.alignment(), Alignment::Right);
        assert_eq!(layout.empty_left(), 7);
    }

    #[test]
    fn test_stretch_fills_allocation() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            margin: Thickness::uniform(1),
            padding: Thickness::symmetric(0, 2),
            ..request(3, Some(30), HorizontalAlignment::Stretch)
        });
        assert_eq!(layout.content_size().width, 30 - 2 - 4);
        assert_eq!(layout.empty_left() + layout.empty_right(), 0);
        assert_eq!(layout.full_width(), 30);
    }

    #[test]
    fn test_stretch_without_allocation_uses_natural_width() {
        let layout = ControlLayout::calculate(&request(9, None, HorizontalAlignment::Stretch));
        assert_eq!(layout.content_size().width, 9);
        assert_eq!(layout.full_width(), 9);
    }

    #[test]
    fn test_unconstrained_uses_natural_width() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            padding: Thickness::uniform(1),
            ..request(40, None, HorizontalAlignment::Center)
        });
        assert_eq!(layout.content_size(), Size::new(40, 1));
        assert_eq!(layout.full_width(), 42);
        assert_eq!(layout.full_height(), 3);
    }

    #[test]
    fn test_content_clamped_to_allocation() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            margin: Thickness::symmetric(0, 2),
            ..request(50, Some(20), HorizontalAlignment::Left)
        });
        assert_eq!(layout.content_size().width, 16);
        assert_eq!(layout.full_width(), 20);
    }

    #[test]
    fn test_max_width_caps_content_but_not_alignment_space() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            max_width: Some(10),
            ..request(50, Some(20), HorizontalAlignment::Center)
        });
        assert_eq!(layout.content_size().width, 10);
        assert_eq!((layout.empty_left(), layout.empty_right()), (5, 5));
    }

    #[test]
    fn test_explicit_width_overrides_natural() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            width: Some(4),
            ..request(50, Some(20), HorizontalAlignment::Left)
        });
        assert_eq!(layout.content_size().width, 4);
    }

    #[test]
    fn test_margin_degrades_when_space_is_short() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            margin: Thickness::symmetric(0, 3),
            padding: Thickness::symmetric(0, 3),
            ..request(10, Some(4), HorizontalAlignment::Left)
        });
        assert_eq!(layout.margin(), Thickness::new(3, 0, 1, 0));
        assert_eq!(layout.padding(), Thickness::ZERO);
        assert_eq!(layout.content_size().width, 0);
        assert_eq!(layout.full_width(), 4);
    }

    #[test]
    fn test_total_never_exceeds_allocation() {
        let alignments = [
            HorizontalAlignment::Left,
            HorizontalAlignment::Center,
            HorizontalAlignment::Right,
            HorizontalAlignment::Stretch,
        ];
        for allocated in 0..25 {
            for alignment in alignments {
                let layout = ControlLayout::calculate(&LayoutRequest {
                    margin: Thickness::new(2, 1, 3, 1),
                    padding: Thickness::new(1, 0, 4, 0),
                    ..request(12, Some(allocated), alignment)
                });
                assert!(layout.full_width() <= allocated);
            }
        }
    }

    #[test]
    fn test_allocated_height_caps_content_height() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            margin: Thickness::uniform(1),
            natural_size: Size::new(5, 10),
            allocated_height: Some(6),
            ..Default::default()
        });
        assert_eq!(layout.content_size().height, 4);
        assert_eq!(layout.full_height(), 6);
    }

    #[test]
    fn test_child_line_width_omits_right_side() {
        let layout = ControlLayout::calculate(&LayoutRequest {
            margin: Thickness::symmetric(0, 1),
            ..request(4, Some(10), HorizontalAlignment::Left)
        });
        // 1 margin + 4 content; the right margin and 4 empty cells are left to the parent
        assert_eq!(layout.child_line_width(), 5);
    }
}
