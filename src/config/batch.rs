use super::load_json_config;
use crate::provider::SegmentationProvider;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BatchToolConfig {
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub provider: SegmentationProvider,
    /// Receives `<stem>.labels.png` and `<stem>.report.json` per input.
    pub output_dir: PathBuf,
    /// Worker threads; `None` uses the rayon default.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl BatchToolConfig {
    pub fn labels_path(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{stem}.labels.png"))
    }

    pub fn report_path(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{stem}.report.json"))
    }
}

pub fn load_config(path: &Path) -> Result<BatchToolConfig, String> {
    load_json_config(path)
}
