//! Graph-based segmentation (Felzenszwalb–Huttenlocher).
//!
//! Pipeline
//! - Copy the input and smooth R, G, B with a separable Gaussian (`smooth`).
//! - Build the 8-neighbour pixel graph with Euclidean RGB weights and sort it
//!   by ascending weight (`edges`).
//! - Merge pass: walk the sorted edges and join two components when the edge
//!   is no heavier than either component's adaptive threshold
//!   `τ = w_last + c / size` (`forest`).
//! - Cleanup pass: walk the same order again and join any pair where one side
//!   is smaller than `min_size`.
//! - Resolve every pixel to its root, fold small 4-connected fragments into a
//!   neighbour and compact to dense ids (`labels`).
//!
//! Larger `threshold` (c) favours larger segments. The caller's buffer is
//! never written; smoothing works on a private copy.
//!
//! Complexity: O(E log E) for the sort, near-linear for the two passes, with
//! `E = 4WH − 3W − 3H + 2`.

pub mod edges;
pub mod forest;

pub use edges::{build_edges, edge_count, sort_edges, PixelEdge};
pub use forest::DisjointSetForest;

use crate::diagnostics::{Algorithm, GraphStage, SegmentationReport, StageClock};
use crate::error::{Result, SegmentError};
use crate::image::ImageRgba;
use crate::labels::{compact_labels, eliminate_small_regions};
use crate::smooth::{smooth_rgba, GaussianKernel};
use crate::types::SegmentationResult;
use log::debug;
use serde::{Deserialize, Serialize};

/// Parameters of the graph-based segmenter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Gaussian pre-filter width in pixels; values below `smooth::MIN_SIGMA`
    /// are raised to it.
    pub sigma: f32,
    /// Merge constant `c`; larger values produce larger segments.
    pub threshold: f32,
    /// Minimum segment size in pixels.
    pub min_size: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            sigma: 0.5,
            threshold: 500.0,
            min_size: 20,
        }
    }
}

impl GraphOptions {
    /// Check the options and build the smoothing kernel they describe.
    pub fn validate(&self) -> Result<GaussianKernel> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(SegmentError::InvalidThreshold(self.threshold));
        }
        GaussianKernel::new(self.sigma)
    }
}

#[derive(Clone, Debug, Default)]
pub struct GraphSegmenter {
    options: GraphOptions,
}

impl GraphSegmenter {
    pub fn new(options: GraphOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    pub fn process(&self, image: ImageRgba<'_>) -> Result<SegmentationResult> {
        self.process_with_report(image).map(|(result, _)| result)
    }

    pub fn process_with_report(
        &self,
        image: ImageRgba<'_>,
    ) -> Result<(SegmentationResult, SegmentationReport)> {
        image.validate()?;
        let kernel = self.options.validate()?;
        let (w, h) = (image.w, image.h);
        let c = self.options.threshold;
        let mut clock = StageClock::start();

        let mut work = image.to_buffer();
        smooth_rgba(&mut work, &kernel);
        clock.lap("smooth");

        let mut edges = build_edges(&work.as_view());
        sort_edges(&mut edges);
        clock.lap("graph");
        debug!(
            "GraphSegmenter::process {}x{} edges={} sigma={:.3} c={}",
            w,
            h,
            edges.len(),
            kernel.sigma(),
            c
        );

        let mut forest = DisjointSetForest::new(w * h, c);
        forest.merge_sorted_edges(&edges, c);
        let merged_components = forest.components();
        clock.lap("merge");

        forest.absorb_small_components(&edges, self.options.min_size);
        let cleaned_components = forest.components();
        clock.lap("cleanup");
        debug!(
            "GraphSegmenter::process components merge={} cleanup={} min_size={}",
            merged_components, cleaned_components, self.options.min_size
        );

        let mut labels = forest.root_labels();
        drop(forest);
        eliminate_small_regions(&mut labels, w, h, self.options.min_size);
        clock.lap("eliminate");

        let size = compact_labels(&mut labels);
        clock.lap("compact");

        let report = SegmentationReport {
            algorithm: Algorithm::GraphBased,
            width: w,
            height: h,
            size,
            timing: clock.finish(),
            graph: Some(GraphStage {
                edges: edges.len(),
                merged_components,
                cleaned_components,
            }),
            clustering: None,
        };
        let result = SegmentationResult {
            width: w,
            height: h,
            size,
            index_map: labels,
            rgba_copy: None,
        };
        Ok((result, report))
    }
}

/// Segment `image` with the graph-based algorithm.
pub fn segment_graph_based(
    image: ImageRgba<'_>,
    options: &GraphOptions,
) -> Result<SegmentationResult> {
    GraphSegmenter::new(*options).process(image)
}
