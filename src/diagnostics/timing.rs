use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall time spent in one stage of a segmentation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Ordered per-stage timings plus the total.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Records consecutive stages: each `lap` closes the stage started by the
/// previous one.
pub(crate) struct StageClock {
    start: Instant,
    lap: Instant,
    breakdown: TimingBreakdown,
}

impl StageClock {
    pub(crate) fn start() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            lap: now,
            breakdown: TimingBreakdown::default(),
        }
    }

    pub(crate) fn lap(&mut self, label: &str) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.lap).as_secs_f64() * 1000.0;
        self.breakdown.push(label, elapsed);
        self.lap = now;
    }

    pub(crate) fn finish(mut self) -> TimingBreakdown {
        self.breakdown.total_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        self.breakdown
    }
}
