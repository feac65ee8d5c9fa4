//! The three social post presets: square, portrait, story.

use crate::error::CropError;
use crate::geometry::AspectRatio;
use serde::Serialize;

/// Output preset: a named target size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostSize {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const SQUARE: PostSize = PostSize {
    name: "square",
    width: 1080,
    height: 1080,
};

pub const PORTRAIT: PostSize = PostSize {
    name: "portrait",
    width: 1080,
    height: 1350,
};

pub const STORY: PostSize = PostSize {
    name: "story",
    width: 1080,
    height: 1920,
};

/// All presets, in output order.
pub const ALL: [PostSize; 3] = [SQUARE, PORTRAIT, STORY];

impl PostSize {
    /// The crop shape this preset asks the selector for.
    ///
    /// Errors only for a hand-built preset with a zero dimension; the
    /// shipped constants always succeed.
    pub fn aspect_ratio(&self) -> Result<AspectRatio, CropError> {
        AspectRatio::new(self.width, self.height)
    }

    /// Output label, e.g. `square_1080x1080`.
    pub fn label(&self) -> String {
        format!("{}_{}x{}", self.name, self.width, self.height)
    }
}
