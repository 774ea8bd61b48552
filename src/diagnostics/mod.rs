//! Structured diagnostics returned next to segmentation results.
//!
//! Everything here is serializable (camelCase) so the tools can dump it as
//! JSON alongside the label image.
pub mod report;
pub mod timing;

pub use report::{Algorithm, ClusteringStage, GraphStage, SegmentationReport};
pub use timing::{StageTiming, TimingBreakdown};

pub(crate) use timing::StageClock;
