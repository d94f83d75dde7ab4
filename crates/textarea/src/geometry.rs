// Chunk: docs/chunks/viewport_scroll - Viewport mapping & scroll arithmetic

//! Minimal pixel geometry for the display layer.
//!
//! Just the value types the transforms need. Widths and heights are
//! unsigned; positions are signed so that out-of-bounds input (a click
//! above the control, a clamped subtraction) stays representable until it
//! is clamped.

use serde::{Deserialize, Serialize};

/// A width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub x: u32,
    pub y: u32,
}

impl Size {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A pixel position. Signed: positions outside a control are legal values,
/// they just fail the containment checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

impl PixelPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Space reserved around the content rectangle of a control.
///
/// Serde-derived so it can ride along in persisted host settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub fn uniform(amount: u32) -> Self {
        Self {
            left: amount,
            top: amount,
            right: amount,
            bottom: amount,
        }
    }

    pub fn x_total(&self) -> u32 {
        self.left + self.right
    }

    pub fn y_total(&self) -> u32 {
        self.top + self.bottom
    }

    /// The content size left inside `outer` after padding, saturating at
    /// zero.
    pub fn inner_size(&self, outer: Size) -> Size {
        Size::new(
            outer.x.saturating_sub(self.x_total()),
            outer.y.saturating_sub(self.y_total()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_totals() {
        let padding = Padding {
            left: 1,
            top: 2,
            right: 3,
            bottom: 4,
        };
        assert_eq!(padding.x_total(), 4);
        assert_eq!(padding.y_total(), 6);
    }

    #[test]
    fn test_inner_size() {
        let padding = Padding::uniform(2);
        assert_eq!(padding.inner_size(Size::new(10, 8)), Size::new(6, 4));
        // saturates instead of underflowing
        assert_eq!(padding.inner_size(Size::new(3, 3)), Size::new(0, 0));
    }
}
