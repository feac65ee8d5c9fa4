//! Search configuration for crop selection.
//!
//! Every knob the selector and scorer expose lives here as a named
//! default, so nothing in the search is a hidden magic number. The
//! search cost is bounded by `step_count² × scale_factors.len()`
//! candidate evaluations.

/// Slide positions per axis when a scale leaves slack on that axis.
pub const DEFAULT_STEP_COUNT: u32 = 7;

/// Relative window scales to try, largest first. Smaller scales allow
/// a tighter crop when it scores better than the maximal window.
pub const DEFAULT_SCALE_FACTORS: [f64; 3] = [1.0, 0.9, 0.8];

pub const DEFAULT_ENTROPY_WEIGHT: f64 = 1.0;
pub const DEFAULT_CONTRAST_WEIGHT: f64 = 1.0;

/// Intensity histogram resolution for the entropy term. Coarser than
/// 256 so small regions still populate buckets; 64 buckets of 4 levels.
pub const DEFAULT_HISTOGRAM_BINS: usize = 64;

/// Tunables for one crop-selection call.
///
/// A selection is a pure function of (image, aspect ratio, config), so
/// holding a config is all the state a caller ever needs.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Slide positions per axis with slack (clamped to ≥ 2 when sliding).
    pub step_count: u32,
    /// Ordered relative scales; factors outside (0, 1] are skipped.
    pub scale_factors: Vec<f64>,
    /// Weight of the Shannon-entropy term.
    pub entropy_weight: f64,
    /// Weight of the normalized-contrast term.
    pub contrast_weight: f64,
    /// Buckets in the intensity histogram (covering 0–255).
    pub histogram_bins: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
            scale_factors: DEFAULT_SCALE_FACTORS.to_vec(),
            entropy_weight: DEFAULT_ENTROPY_WEIGHT,
            contrast_weight: DEFAULT_CONTRAST_WEIGHT,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}
