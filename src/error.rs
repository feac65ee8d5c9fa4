//! Error types for crop selection.

use crate::geometry::Rect;
use thiserror::Error;

/// Errors produced by the crop-selection core.
///
/// `InvalidRegion` indicates a contract violation between candidate
/// generation and the scorer — with correct arithmetic it never fires.
/// The other variants are plain input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CropError {
    #[error("image has zero width or height")]
    EmptyImage,
    #[error("aspect ratio {width}:{height} has a zero component")]
    UnsupportedAspectRatio { width: u32, height: u32 },
    #[error("region {region:?} exceeds image bounds {width}x{height}")]
    InvalidRegion {
        region: Rect,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, CropError>;
