use super::load_json_config;
use crate::provider::SegmentationProvider;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SegmentToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub provider: SegmentationProvider,
    pub output: SegmentOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SegmentOutputConfig {
    /// Label map encoded as packed-RGB PNG.
    pub labels_png: PathBuf,
    /// Optional `SegmentationReport` dump.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// Optional `SegmentationResult` dump (with `rgbaCopy` when requested).
    #[serde(default)]
    pub result_json: Option<PathBuf>,
    #[serde(default)]
    pub include_rgba: bool,
}

pub fn load_config(path: &Path) -> Result<SegmentToolConfig, String> {
    load_json_config(path)
}
