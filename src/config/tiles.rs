use super::load_json_config;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TilesToolConfig {
    /// Large mosaic to split.
    pub input: PathBuf,
    /// Legend CSV listing the label names.
    pub legend: PathBuf,
    #[serde(default = "default_label_column")]
    pub label_column: String,
    #[serde(default = "default_tiles_per_side")]
    pub tiles_per_side: usize,
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    #[serde(default = "default_annotations_dir")]
    pub annotations_dir: PathBuf,
    #[serde(default = "default_config_out")]
    pub config_out: PathBuf,
}

fn default_label_column() -> String {
    "Genus/Species".to_string()
}

fn default_tiles_per_side() -> usize {
    10
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("data/images")
}

fn default_annotations_dir() -> PathBuf {
    PathBuf::from("data/annotations")
}

fn default_config_out() -> PathBuf {
    PathBuf::from("data/config.json")
}

pub fn load_config(path: &Path) -> Result<TilesToolConfig, String> {
    load_json_config(path)
}
