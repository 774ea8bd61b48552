use super::timing::TimingBreakdown;
use serde::{Deserialize, Serialize};

/// Which provider produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithm {
    GraphBased,
    Superpixel,
    Precomputed,
}

/// Convergence outcome of the iterative cluster assignment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusteringStage {
    /// Number of seeded clusters (`numRegionsX * numRegionsY`).
    pub clusters: usize,
    pub iterations: usize,
    /// Sum of absolute center displacements in the last round.
    pub residual: f32,
    pub converged: bool,
}

/// Graph statistics of a graph-based run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStage {
    pub edges: usize,
    /// Live components after the weighted merge pass.
    pub merged_components: usize,
    /// Live components after the small-component pass.
    pub cleaned_components: usize,
}

/// Structured summary of one segmentation call.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationReport {
    pub algorithm: Algorithm,
    pub width: usize,
    pub height: usize,
    pub size: usize,
    pub timing: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clustering: Option<ClusteringStage>,
}
