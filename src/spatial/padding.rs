//! Edge padding that pulls star coordinates in from the canvas borders
//!
//! A raw coordinate at or past the midpoint moves back by the padding, one
//! before it moves forward by the same amount, so every padded coordinate
//! lands in `[padding, size - padding)`. No sample is ever rejected and the
//! number of draws stays fixed regardless of where stars land.

/// Fraction of the canvas size used as padding
pub const PADDING_RATIO: f64 = 0.2;

/// Padding transform for a square canvas of a given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePadding {
    mid: f64,
    padding: f64,
}

impl EdgePadding {
    /// Padding for a canvas with side length `size`
    pub fn for_canvas(size: u32) -> Self {
        let size = f64::from(size);
        Self {
            mid: size / 2.0,
            padding: size * PADDING_RATIO,
        }
    }

    /// Midpoint of the canvas side
    pub const fn mid(&self) -> f64 {
        self.mid
    }

    /// Distance each coordinate is shifted by
    pub const fn padding(&self) -> f64 {
        self.padding
    }

    /// Apply the padding shift to one raw coordinate
    pub fn apply(&self, raw: f64) -> f64 {
        pad_value(raw, self.mid, self.padding)
    }
}

/// Shift `value` by `padding` towards the middle of the canvas
///
/// Values at or above `mid` move down, values below move up.
pub fn pad_value(value: f64, mid: f64, padding: f64) -> f64 {
    if value >= mid {
        value - padding
    } else {
        value + padding
    }
}
