//! Tiling of large mosaics into labeling-sized crops.
//!
//! Along an axis of extent `E` split into `n` tiles, the step is
//! `win = ceil(E / n)` and tile origins are `0, win, …, (n−1)·win`. Every
//! tile spans `win` pixels except the last, which spans whatever remains.
//! Tiles that would be empty are dropped. Tiles are numbered row-major.
use crate::config::tiles::TilesToolConfig;
use crate::image::io::{load_rgba_image, save_rgba_png, write_json_file};
use crate::image::RgbaBuffer;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Origin and extent of one tile along a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSpan {
    pub origin: usize,
    pub extent: usize,
}

/// A crop rectangle and its sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Tile {
    /// Zero-padded file name, e.g. `007.png`.
    pub fn file_name(&self) -> String {
        format!("{:03}.png", self.index)
    }
}

pub fn axis_spans(extent: usize, tiles: usize) -> Vec<AxisSpan> {
    let n = tiles.max(1);
    let win = extent.div_ceil(n);
    if win == 0 {
        return Vec::new();
    }
    let end = (n - 1) * win;
    (0..n)
        .map(|i| {
            let origin = i * win;
            let extent = if origin == end {
                extent.saturating_sub(end)
            } else {
                win.min(extent.saturating_sub(origin))
            };
            AxisSpan { origin, extent }
        })
        .filter(|span| span.extent > 0)
        .collect()
}

/// Row-major tile layout covering a `width × height` image.
pub fn plan_tiles(width: usize, height: usize, tiles_per_side: usize) -> Vec<Tile> {
    let cols = axis_spans(width, tiles_per_side);
    let rows = axis_spans(height, tiles_per_side);
    let mut tiles = Vec::with_capacity(cols.len() * rows.len());
    for row in &rows {
        for col in &cols {
            tiles.push(Tile {
                index: tiles.len(),
                x: col.origin,
                y: row.origin,
                w: col.extent,
                h: row.extent,
            });
        }
    }
    tiles
}

/// Labeling configuration consumed by the annotation front end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TilesManifest {
    pub labels: Vec<String>,
    #[serde(rename = "imageURLs")]
    pub image_urls: Vec<String>,
    #[serde(rename = "annotationURLs")]
    pub annotation_urls: Vec<String>,
}

/// Collect one column of a legend CSV as label names.
pub fn read_legend_labels(path: &Path, column: &str) -> Result<Vec<String>, String> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| format!("Failed to open legend {}: {e}", path.display()))?;
    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read legend header {}: {e}", path.display()))?;
    let idx = headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| format!("Legend {} has no '{column}' column", path.display()))?;
    let mut labels = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| format!("Failed to parse legend {}: {e}", path.display()))?;
        if let Some(value) = record.get(idx) {
            labels.push(value.trim().to_string());
        }
    }
    Ok(labels)
}

/// Crop `mosaic` into tiles under `<images_dir>/<stem>/` and return the
/// manifest, without writing it.
pub fn write_tiles(
    mosaic: &RgbaBuffer,
    stem: &str,
    config: &TilesToolConfig,
    labels: Vec<String>,
) -> Result<TilesManifest, String> {
    let image_dir = config.images_dir.join(stem);
    let annotation_dir = config.annotations_dir.join(stem);
    let tiles = plan_tiles(mosaic.width(), mosaic.height(), config.tiles_per_side);
    let mut manifest = TilesManifest {
        labels,
        image_urls: Vec::with_capacity(tiles.len()),
        annotation_urls: Vec::with_capacity(tiles.len()),
    };
    for tile in &tiles {
        let crop = mosaic.crop(tile.x, tile.y, tile.w, tile.h);
        let image_path = image_dir.join(tile.file_name());
        save_rgba_png(&crop, &image_path)?;
        manifest.image_urls.push(url_string(&image_path));
        manifest
            .annotation_urls
            .push(url_string(&annotation_dir.join(tile.file_name())));
    }
    debug!(
        "write_tiles: {} tiles of {}x{} mosaic into {}",
        tiles.len(),
        mosaic.width(),
        mosaic.height(),
        image_dir.display()
    );
    Ok(manifest)
}

/// Full tiling run: load, crop, write tiles and the JSON manifest.
pub fn prepare_tiles(config: &TilesToolConfig) -> Result<TilesManifest, String> {
    let labels = read_legend_labels(&config.legend, &config.label_column)?;
    let mosaic = load_rgba_image(&config.input)?;
    let stem = config
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Input {} has no file name", config.input.display()))?;
    let manifest = write_tiles(&mosaic, stem, config, labels)?;
    write_json_file(&config.config_out, &manifest)?;
    Ok(manifest)
}

fn url_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
