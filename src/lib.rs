//! Image segmentation into label maps for region-based annotation.
//!
//! Two independent algorithms turn an RGBA buffer into a dense `i32` label
//! map:
//! - `graph`: Felzenszwalb–Huttenlocher merging of a sorted 8-neighbour pixel
//!   graph through a disjoint-set forest with adaptive thresholds.
//! - `superpixel`: SLICO-style clustering in Lab space with per-cluster
//!   distance normalization.
//!
//! Both finish with small-region elimination and dense relabeling, so every
//! result satisfies: labels are exactly `0..size`, each label is used, and
//! equal inputs give equal outputs.

// Public modules (stable-ish surface)
pub mod error;
pub mod graph;
pub mod image;
pub mod labels;
pub mod provider;
pub mod superpixel;
pub mod types;

// Building blocks and tooling.
pub mod color;
pub mod config;
pub mod diagnostics;
pub mod smooth;
pub mod tiles;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Result, SegmentError};
pub use crate::graph::{segment_graph_based, GraphOptions, GraphSegmenter};
pub use crate::provider::SegmentationProvider;
pub use crate::superpixel::{segment_superpixel, SuperpixelOptions, SuperpixelSegmenter};
pub use crate::types::SegmentationResult;

pub use crate::diagnostics::SegmentationReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use segmenter::prelude::*;
///
/// # fn main() -> segmenter::Result<()> {
/// let (w, h) = (64usize, 48usize);
/// let rgba = vec![255u8; w * h * 4];
/// let img = ImageRgba::new(w, h, &rgba)?;
///
/// let result = segment_graph_based(img, &GraphOptions::default())?;
/// println!("segments={}", result.size);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgba;
    pub use crate::{
        segment_graph_based, segment_superpixel, GraphOptions, SegmentationProvider,
        SegmentationResult, SuperpixelOptions,
    };
}
