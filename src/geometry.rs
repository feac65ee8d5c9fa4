//! Geometric primitives: crop rectangles and aspect ratios.
//!
//! All functions here are pure integer/float math and testable without
//! touching pixel data. Center distances use doubled coordinates so
//! tie-breaking in the selector stays exact — no float comparisons.

use crate::error::CropError;
use serde::Serialize;

/// Axis-aligned crop rectangle in source-image pixel coordinates.
///
/// Invariants relative to the image it was derived from:
/// `width > 0`, `height > 0`, `x + width <= image.width`,
/// `y + height <= image.height`. Checked via [`Rect::contained_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rectangle lies fully inside an image of the given size.
    pub fn contained_in(&self, image_width: u32, image_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self
                .x
                .checked_add(self.width)
                .is_some_and(|right| right <= image_width)
            && self
                .y
                .checked_add(self.height)
                .is_some_and(|bottom| bottom <= image_height)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Center point in doubled coordinates (`2·cx`, `2·cy`).
    ///
    /// Doubling keeps half-pixel centers representable as integers.
    pub fn center2(&self) -> (u64, u64) {
        (
            2 * self.x as u64 + self.width as u64,
            2 * self.y as u64 + self.height as u64,
        )
    }

    /// Manhattan distance from this rectangle's center to the image
    /// center, in doubled coordinates.
    pub fn center_distance2(&self, image_width: u32, image_height: u32) -> u64 {
        let (cx, cy) = self.center2();
        cx.abs_diff(image_width as u64) + cy.abs_diff(image_height as u64)
    }

    /// Whether `width / height` matches `ratio` within one pixel of
    /// rounding per dimension.
    pub fn matches_ratio(&self, ratio: AspectRatio) -> bool {
        let r = ratio.as_f64();
        let from_height = (self.height as f64 * r).round();
        let from_width = (self.width as f64 / r).round();
        (self.width as f64 - from_height).abs() <= 1.0
            || (self.height as f64 - from_width).abs() <= 1.0
    }
}

/// Target shape for a crop. Only the quotient `width / height` matters;
/// absolute output dimensions are applied by the caller's resize step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// Validated constructor; both components must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self, CropError> {
        if width == 0 || height == 0 {
            return Err(CropError::UnsupportedAspectRatio { width, height });
        }
        Ok(Self { width, height })
    }

    /// Const constructor for compile-time presets. Panics (at compile
    /// time, when const-evaluated) on a zero component.
    pub const fn of(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_f64(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}
