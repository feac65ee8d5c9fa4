//! # postcrop
//!
//! Entropy-guided smart cropping for social media post sizes. One source
//! image in, three cropped and resized variants out: square (1080×1080),
//! portrait (1080×1350), and story (1080×1920).
//!
//! # Architecture
//!
//! The crate is a small core wrapped in thin glue:
//!
//! ```text
//! pipeline  →  select_best_crop  →  RegionScorer   (many candidates)
//!           ←  best Rect
//!           →  crop_imm + resize_exact + PNG encode
//! ```
//!
//! - **Region scorer** ([`score`]): rates a window by intensity-histogram
//!   Shannon entropy plus local contrast. Texture and tonal spread score
//!   high; flat sky and blank walls score zero.
//! - **Crop selector** ([`select`]): slides ratio-conforming windows at a
//!   few scales across the image's slack axis (or axes), scores each, and
//!   returns the winner. Bounded, deterministic grid search — ties break
//!   toward the image center, then the larger crop.
//! - **Pipeline** ([`pipeline`]): decode → select per preset → crop →
//!   Lanczos3 resize → PNG bytes. The only layer that knows about files
//!   and encodings.
//!
//! Selection is a pure function of (image, ratio, config): no caches, no
//! shared mutable state, identical output for identical input. Candidate
//! scoring fans out across a rayon pool; the reduction uses a total order
//! so parallelism never changes the answer.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | `Rect` and `AspectRatio` primitives with their invariants |
//! | [`score`] | entropy + contrast information score per region |
//! | [`select`] | candidate generation and best-crop search |
//! | [`config`] | search tunables and their documented defaults |
//! | [`variants`] | the square/portrait/story presets |
//! | [`pipeline`] | decode/crop/resize/encode glue around the core |
//! | [`error`] | core error types |

pub mod config;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod score;
pub mod select;
pub mod variants;

pub use config::SearchConfig;
pub use error::CropError;
pub use geometry::{AspectRatio, Rect};
pub use pipeline::{PipelineError, RenderedVariant, load_image, render_variants};
pub use score::RegionScorer;
pub use select::select_best_crop;
pub use variants::PostSize;
