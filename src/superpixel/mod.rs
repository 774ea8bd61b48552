//! Superpixel segmentation by adaptive, locally windowed clustering (SLICO).
//!
//! Pipeline
//! - Convert RGB to Lab planes (`color`).
//! - Build a gradient-energy map and seed one centre per `S × S` grid cell,
//!   snapped to the 3×3 gradient minimum (`gradient`, `seeds`).
//! - Iterate assignment / adaptation / centre update until the centres stop
//!   moving (`engine`). Each cluster carries its own colour and spatial
//!   scales, so no global compactness weight is needed.
//! - Fold superpixels smaller than `min_region_size` into a neighbour and
//!   compact the labels (`labels`).
//!
//! Complexity: O(K·(2S)²) = O(4·W·H) per round, at most 10 rounds.

pub mod cluster;
pub mod engine;
pub mod gradient;
mod options;
pub mod seeds;

pub use cluster::{ClusterAdaptation, ClusterCenter};
pub use engine::{ClusterEngine, ClusterOutcome, MAX_ITERATIONS, RESIDUAL_EPSILON};
pub use gradient::gradient_map;
pub use options::SuperpixelOptions;
pub use seeds::SeedGrid;

use crate::color::LabImage;
use crate::diagnostics::{Algorithm, ClusteringStage, SegmentationReport, StageClock};
use crate::error::Result;
use crate::image::ImageRgba;
use crate::labels::{compact_labels, eliminate_small_regions};
use crate::types::SegmentationResult;
use log::debug;

#[derive(Clone, Debug, Default)]
pub struct SuperpixelSegmenter {
    options: SuperpixelOptions,
}

impl SuperpixelSegmenter {
    pub fn new(options: SuperpixelOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SuperpixelOptions {
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
        let (w, h) = (image.w, image.h);
        self.options.validate(w, h)?;
        let min_region_size = self.options.resolved_min_region_size();
        let mut clock = StageClock::start();

        let lab = LabImage::from_rgba(&image);
        clock.lap("color");

        let gradient = gradient_map(&lab);
        clock.lap("gradient");

        let grid = SeedGrid::new(w, h, self.options.region_size);
        let centers = grid.place(&lab, &gradient);
        drop(gradient);
        clock.lap("seed");
        debug!(
            "SuperpixelSegmenter::process {}x{} region_size={} seeds={}x{}",
            w, h, grid.region_size, grid.nx, grid.ny
        );

        let outcome = ClusterEngine::new(&lab, grid, centers).run();
        clock.lap("cluster");
        debug!(
            "SuperpixelSegmenter::process iterations={} residual={:.6} converged={}",
            outcome.iterations, outcome.residual, outcome.converged
        );

        let clustering = ClusteringStage {
            clusters: outcome.centers.len(),
            iterations: outcome.iterations,
            residual: outcome.residual,
            converged: outcome.converged,
        };
        let mut labels = outcome.labels;
        eliminate_small_regions(&mut labels, w, h, min_region_size);
        clock.lap("eliminate");

        let size = compact_labels(&mut labels);
        clock.lap("compact");

        let report = SegmentationReport {
            algorithm: Algorithm::Superpixel,
            width: w,
            height: h,
            size,
            timing: clock.finish(),
            graph: None,
            clustering: Some(clustering),
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

/// Segment `image` into superpixels.
pub fn segment_superpixel(
    image: ImageRgba<'_>,
    options: &SuperpixelOptions,
) -> Result<SegmentationResult> {
    SuperpixelSegmenter::new(*options).process(image)
}
