//! Selection of the segmentation source used by an annotator.
//!
//! An annotator owns one `SegmentationProvider` and asks it for a
//! `SegmentationResult`; it never re-derives segments itself.
use crate::diagnostics::{Algorithm, SegmentationReport, StageClock};
use crate::error::Result;
use crate::graph::{GraphOptions, GraphSegmenter};
use crate::image::ImageRgba;
use crate::labels::{compact_labels, decode_label_map};
use crate::superpixel::{SuperpixelOptions, SuperpixelSegmenter};
use crate::types::SegmentationResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SegmentationProvider {
    /// Felzenszwalb–Huttenlocher graph segmentation.
    GraphBased(GraphOptions),
    /// Adaptive superpixel clustering.
    Superpixel(SuperpixelOptions),
    /// The input already is a label image in the packed-RGB layout.
    Precomputed,
}

impl Default for SegmentationProvider {
    fn default() -> Self {
        Self::GraphBased(GraphOptions::default())
    }
}

impl SegmentationProvider {
    pub fn segment(&self, image: ImageRgba<'_>) -> Result<SegmentationResult> {
        self.segment_with_report(image).map(|(result, _)| result)
    }

    pub fn segment_with_report(
        &self,
        image: ImageRgba<'_>,
    ) -> Result<(SegmentationResult, SegmentationReport)> {
        match self {
            Self::GraphBased(options) => GraphSegmenter::new(*options).process_with_report(image),
            Self::Superpixel(options) => {
                SuperpixelSegmenter::new(*options).process_with_report(image)
            }
            Self::Precomputed => import_label_image(image),
        }
    }
}

/// Decode a packed-RGB label image and compact its labels.
pub fn import_label_image(
    image: ImageRgba<'_>,
) -> Result<(SegmentationResult, SegmentationReport)> {
    image.validate()?;
    let mut clock = StageClock::start();
    let mut labels = decode_label_map(&image);
    clock.lap("decode");
    let size = compact_labels(&mut labels);
    clock.lap("compact");
    let report = SegmentationReport {
        algorithm: Algorithm::Precomputed,
        width: image.w,
        height: image.h,
        size,
        timing: clock.finish(),
        graph: None,
        clustering: None,
    };
    let result = SegmentationResult {
        width: image.w,
        height: image.h,
        size,
        index_map: labels,
        rgba_copy: None,
    };
    Ok((result, report))
}
