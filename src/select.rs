//! Crop selection: bounded grid search for the best-scoring window.
//!
//! The search is an explicit, deterministic enumeration:
//!
//! 1. Derive the maximal window — the largest rectangle of the target
//!    aspect ratio that fits in the image. If it covers the whole image
//!    the answer is forced and no scoring happens (the common case for
//!    already-matching ratios).
//! 2. For each configured scale factor, slide the scaled window across
//!    whatever slack each axis has, at `step_count` evenly spaced
//!    positions spanning edge to edge.
//! 3. Score every candidate with the [`RegionScorer`] and keep the best.
//!
//! Candidates are scored in parallel via rayon — scoring is pure and
//! reads a shared immutable plane — and the winner is picked with a
//! total-order comparator, so the result never depends on evaluation
//! order. Ties go to the candidate closest to the image center, then to
//! the largest area, then to the smallest (x, y).

use crate::config::SearchConfig;
use crate::error::{CropError, Result};
use crate::geometry::{AspectRatio, Rect};
use crate::score::RegionScorer;
use image::{DynamicImage, GrayImage};
use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;

/// A candidate crop with its computed information score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub rect: Rect,
    pub score: f64,
}

/// Select the best crop window of `ratio` in `image`.
///
/// Deterministic for identical inputs and configuration. The returned
/// rectangle is fully contained in the image and matches `ratio` within
/// one pixel of rounding per dimension; the caller resizes it to the
/// final output dimensions.
pub fn select_best_crop(
    image: &DynamicImage,
    ratio: AspectRatio,
    config: &SearchConfig,
) -> Result<Rect> {
    select_on_luma(&image.to_luma8(), ratio, config)
}

/// [`select_best_crop`] on a precomputed grayscale plane.
///
/// Lets a caller producing several variants of one image pay for the
/// grayscale conversion once.
pub fn select_on_luma(luma: &GrayImage, ratio: AspectRatio, config: &SearchConfig) -> Result<Rect> {
    let (width, height) = luma.dimensions();
    if width == 0 || height == 0 {
        return Err(CropError::EmptyImage);
    }

    let candidates = generate_candidates(width, height, ratio, config);
    debug!(
        "{}:{} in {width}x{height}: {} candidates",
        ratio.width(),
        ratio.height(),
        candidates.len()
    );
    if candidates.len() == 1 {
        return Ok(candidates[0]);
    }

    let scorer = RegionScorer::from_config(config);
    let scored: Vec<ScoredCandidate> = candidates
        .par_iter()
        .map(|&rect| scorer.score(luma, rect).map(|score| ScoredCandidate { rect, score }))
        .collect::<Result<_>>()?;

    let best = scored
        .iter()
        .max_by(|a, b| preference(a, b, width, height))
        .copied()
        .ok_or(CropError::EmptyImage)?;
    debug!("best candidate {:?} score {:.4}", best.rect, best.score);
    Ok(best.rect)
}

/// Total preference order over scored candidates; `Greater` wins.
///
/// Score first, then closeness to the image center, then area. The
/// final coordinate comparison makes the order total, so the selection
/// is reproducible no matter how candidates were enumerated.
fn preference(
    a: &ScoredCandidate,
    b: &ScoredCandidate,
    image_width: u32,
    image_height: u32,
) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| {
            b.rect
                .center_distance2(image_width, image_height)
                .cmp(&a.rect.center_distance2(image_width, image_height))
        })
        .then_with(|| a.rect.area().cmp(&b.rect.area()))
        .then_with(|| b.rect.x.cmp(&a.rect.x))
        .then_with(|| b.rect.y.cmp(&a.rect.y))
}

/// Largest rectangle of `ratio` that fits in the image, anchored at the
/// origin. Dimensions are clamped to at least one pixel so degenerate
/// sources (1×N strips) still produce a valid window.
fn maximal_window(width: u32, height: u32, ratio: AspectRatio) -> Rect {
    let target = ratio.as_f64();
    let source = width as f64 / height as f64;
    if source > target {
        // Wider than the ratio demands: full height, horizontal slack.
        let h = height;
        let w = ((h as f64 * target).round() as u32).clamp(1, width);
        Rect::new(0, 0, w, h)
    } else {
        let w = width;
        let h = ((w as f64 / target).round() as u32).clamp(1, height);
        Rect::new(0, 0, w, h)
    }
}

/// All candidate windows for the search, maximal window first.
fn generate_candidates(
    width: u32,
    height: u32,
    ratio: AspectRatio,
    config: &SearchConfig,
) -> Vec<Rect> {
    let maximal = maximal_window(width, height, ratio);
    if maximal.width == width && maximal.height == height {
        return vec![maximal];
    }

    let mut candidates = Vec::new();
    for &scale in &config.scale_factors {
        if !(scale > 0.0 && scale <= 1.0) {
            continue;
        }
        // Height from the scale, width from the ratio: keeps conformance
        // within one pixel at every scale.
        let h = ((maximal.height as f64 * scale).round() as u32).clamp(1, height);
        let w = ((h as f64 * ratio.as_f64()).round() as u32).clamp(1, width);
        for &y in &axis_steps(height - h, config.step_count) {
            for &x in &axis_steps(width - w, config.step_count) {
                let rect = Rect::new(x, y, w, h);
                debug_assert!(rect.contained_in(width, height));
                debug_assert!(rect.matches_ratio(ratio));
                candidates.push(rect);
            }
        }
    }
    if candidates.is_empty() {
        // Every scale factor was out of range; the centered maximal
        // window is still a valid answer.
        candidates.push(Rect::new(
            (width - maximal.width) / 2,
            (height - maximal.height) / 2,
            maximal.width,
            maximal.height,
        ));
    }
    candidates
}

/// Evenly spaced offsets covering `0..=slack`, deduplicated when the
/// slack is smaller than the step count.
fn axis_steps(slack: u32, step_count: u32) -> Vec<u32> {
    if slack == 0 {
        return vec![0];
    }
    let steps = step_count.max(2);
    let mut positions: Vec<u32> = (0..steps)
        .map(|i| (i as f64 * slack as f64 / (steps - 1) as f64).round() as u32)
        .collect();
    positions.dedup();
    positions
}
