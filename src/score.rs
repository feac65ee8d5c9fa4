//! Region scoring: how much visual information a crop window holds.
//!
//! The score combines two measures over the region's luminance values:
//!
//! | Term | Measure | Rewards |
//! |---|---|---|
//! | Entropy | Shannon entropy of the intensity histogram | tonal diversity, texture |
//! | Contrast | population std dev of intensities, scaled by 1/128 | tonal spread |
//!
//! Flat backgrounds (sky, blank walls) score near zero on both terms;
//! detailed subjects score high on both. Scoring is pure and
//! deterministic — the selector relies on that for reproducible results.

use crate::config::SearchConfig;
use crate::error::{CropError, Result};
use crate::geometry::Rect;
use image::GrayImage;

/// Divisor bringing the contrast term onto the same rough scale as the
/// entropy term: half the 0–255 intensity range.
pub const CONTRAST_NORMALIZATION: f64 = 128.0;

/// Scores rectangular regions of a grayscale plane.
#[derive(Debug, Clone, Copy)]
pub struct RegionScorer {
    entropy_weight: f64,
    contrast_weight: f64,
    bins: usize,
}

impl RegionScorer {
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            entropy_weight: config.entropy_weight,
            contrast_weight: config.contrast_weight,
            // A histogram needs at least one bucket.
            bins: config.histogram_bins.max(1),
        }
    }

    /// Information score for `region`, always finite and ≥ 0 with
    /// non-negative weights.
    ///
    /// Returns [`CropError::InvalidRegion`] if the region is not fully
    /// contained in the plane. The selector only ever passes contained
    /// regions, so hitting that variant means a candidate-generation bug.
    pub fn score(&self, luma: &GrayImage, region: Rect) -> Result<f64> {
        let (width, height) = luma.dimensions();
        if !region.contained_in(width, height) {
            return Err(CropError::InvalidRegion {
                region,
                width,
                height,
            });
        }

        let mut histogram = vec![0u64; self.bins];
        let mut sum = 0u64;
        let mut sum_squares = 0u64;

        // Row slices over the raw buffer; per-pixel get_pixel is too slow
        // for step_count² × scales evaluations.
        let raw = luma.as_raw();
        let stride = width as usize;
        for row in region.y..region.y + region.height {
            let start = row as usize * stride + region.x as usize;
            for &value in &raw[start..start + region.width as usize] {
                histogram[value as usize * self.bins / 256] += 1;
                sum += value as u64;
                sum_squares += value as u64 * value as u64;
            }
        }

        let count = region.area() as f64;
        let mut entropy = 0.0;
        for &bucket in &histogram {
            if bucket > 0 {
                let p = bucket as f64 / count;
                entropy -= p * p.log2();
            }
        }

        let mean = sum as f64 / count;
        let variance = (sum_squares as f64 / count - mean * mean).max(0.0);
        let contrast = variance.sqrt();

        Ok(self.entropy_weight * entropy
            + self.contrast_weight * (contrast / CONTRAST_NORMALIZATION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn scorer() -> RegionScorer {
        RegionScorer::from_config(&SearchConfig::default())
    }

    fn checkerboard(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([0])
            } else {
                Luma([255])
            }
        })
    }

    #[test]
    fn uniform_region_scores_zero() {
        let img = GrayImage::from_pixel(64, 64, Luma([128]));
        let score = scorer().score(&img, Rect::new(0, 0, 64, 64)).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn one_pixel_region_scores_zero() {
        let img = GrayImage::from_pixel(8, 8, Luma([200]));
        let score = scorer().score(&img, Rect::new(3, 3, 1, 1)).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn checkerboard_beats_uniform() {
        let flat = GrayImage::from_pixel(64, 64, Luma([128]));
        let busy = checkerboard(64, 64);
        let region = Rect::new(0, 0, 64, 64);
        let s = scorer();
        assert!(s.score(&busy, region).unwrap() > s.score(&flat, region).unwrap());
    }

    #[test]
    fn two_tone_region_has_unit_entropy() {
        // Half 0, half 255: two occupied buckets at p = 0.5 → entropy 1,
        // population std dev 127.5.
        let img = checkerboard(64, 64);
        let config = SearchConfig {
            contrast_weight: 0.0,
            ..SearchConfig::default()
        };
        let entropy_only = RegionScorer::from_config(&config)
            .score(&img, Rect::new(0, 0, 64, 64))
            .unwrap();
        assert!((entropy_only - 1.0).abs() < 1e-9);

        let full = scorer().score(&img, Rect::new(0, 0, 64, 64)).unwrap();
        assert!((full - (1.0 + 127.5 / CONTRAST_NORMALIZATION)).abs() < 1e-9);
    }

    #[test]
    fn weights_scale_their_terms() {
        let img = checkerboard(32, 32);
        let region = Rect::new(0, 0, 32, 32);
        let base = scorer().score(&img, region).unwrap();
        let doubled = RegionScorer::from_config(&SearchConfig {
            entropy_weight: 2.0,
            contrast_weight: 2.0,
            ..SearchConfig::default()
        })
        .score(&img, region)
        .unwrap();
        assert!((doubled - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn out_of_bounds_region_is_invalid() {
        let img = GrayImage::from_pixel(16, 16, Luma([0]));
        let result = scorer().score(&img, Rect::new(8, 8, 16, 16));
        assert!(matches!(result, Err(CropError::InvalidRegion { .. })));
    }

    #[test]
    fn subregion_scoring_reads_only_the_window() {
        // Busy patch top-left, flat elsewhere: the patch window must
        // outscore an equally sized flat window.
        let mut img = GrayImage::from_pixel(64, 64, Luma([128]));
        for y in 0..16 {
            for x in 0..16 {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                img.put_pixel(x, y, Luma([v]));
            }
        }
        let s = scorer();
        let patch = s.score(&img, Rect::new(0, 0, 16, 16)).unwrap();
        let flat = s.score(&img, Rect::new(32, 32, 16, 16)).unwrap();
        assert!(patch > flat);
        assert_eq!(flat, 0.0);
    }
}
