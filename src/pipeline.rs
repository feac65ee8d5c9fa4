//! Caller-side glue: decode, select, crop, resize, encode.
//!
//! The selection core never touches files or encodings; this module is
//! the thin layer that feeds it. One decoded image goes in, one PNG per
//! [`PostSize`] preset comes out:
//!
//! ```text
//! decode → shared grayscale plane → select crop   (per preset, parallel)
//!                                 → crop_imm
//!                                 → resize_exact (Lanczos3)
//!                                 → PNG bytes
//! ```
//!
//! The grayscale plane is converted once and shared across presets.

use crate::config::SearchConfig;
use crate::error::CropError;
use crate::geometry::Rect;
use crate::select::select_on_luma;
use crate::variants::PostSize;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode PNG: {0}")]
    Encode(image::ImageError),
    #[error(transparent)]
    Crop(#[from] CropError),
}

/// One finished output: the chosen crop and the encoded result.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedVariant {
    /// Output label, e.g. `square_1080x1080`.
    pub label: String,
    /// Crop window chosen in source-image coordinates.
    pub crop: Rect,
    /// Final output dimensions.
    pub width: u32,
    pub height: u32,
    /// PNG-encoded output pixels.
    #[serde(skip)]
    pub png: Vec<u8>,
}

/// Decode an image file (`png`/`jpg`/`jpeg`/`webp`).
pub fn load_image(path: &Path) -> Result<DynamicImage, PipelineError> {
    ImageReader::open(path)
        .map_err(PipelineError::Io)?
        .decode()
        .map_err(|source| PipelineError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Render every requested preset from one source image.
///
/// Presets are independent and render in parallel; output order follows
/// `sizes`.
pub fn render_variants(
    image: &DynamicImage,
    sizes: &[PostSize],
    config: &SearchConfig,
) -> Result<Vec<RenderedVariant>, PipelineError> {
    let luma = image.to_luma8();
    sizes
        .par_iter()
        .map(|&size| render_one(image, &luma, size, config))
        .collect()
}

fn render_one(
    image: &DynamicImage,
    luma: &image::GrayImage,
    size: PostSize,
    config: &SearchConfig,
) -> Result<RenderedVariant, PipelineError> {
    let ratio = size.aspect_ratio()?;
    let crop = select_on_luma(luma, ratio, config)?;
    debug!("{}: cropping {crop:?}", size.name);

    let cropped = image.crop_imm(crop.x, crop.y, crop.width, crop.height);
    let resized = cropped.resize_exact(size.width, size.height, FilterType::Lanczos3);

    let mut buffer = Cursor::new(Vec::new());
    resized
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(PipelineError::Encode)?;

    Ok(RenderedVariant {
        label: size.label(),
        crop,
        width: size.width,
        height: size.height,
        png: buffer.into_inner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants;
    use image::{GrayImage, Luma};

    fn textured_source(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
            Luma([((x * 3 + y * 11) % 256) as u8])
        }))
    }

    #[test]
    fn renders_all_three_presets() {
        let source = textured_source(400, 300);
        let rendered =
            render_variants(&source, &variants::ALL, &SearchConfig::default()).unwrap();

        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].label, "square_1080x1080");
        assert_eq!(rendered[1].label, "portrait_1080x1350");
        assert_eq!(rendered[2].label, "story_1080x1920");

        for variant in &rendered {
            assert!(variant.crop.contained_in(400, 300));
            let decoded = image::load_from_memory(&variant.png).unwrap();
            assert_eq!(decoded.width(), variant.width);
            assert_eq!(decoded.height(), variant.height);
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let source = textured_source(320, 240);
        let config = SearchConfig::default();
        let first = render_variants(&source, &variants::ALL, &config).unwrap();
        let second = render_variants(&source, &variants::ALL, &config).unwrap();
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.crop, b.crop);
            assert_eq!(a.png, b.png);
        }
    }

    #[test]
    fn load_image_reports_missing_file() {
        let result = load_image(Path::new("/nonexistent/input.png"));
        assert!(matches!(result, Err(PipelineError::Io(_))));
    }
}
