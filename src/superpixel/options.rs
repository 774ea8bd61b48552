use crate::error::{Result, SegmentError};
use serde::{Deserialize, Serialize};

/// Parameters of the superpixel segmenter.
///
/// - `region_size`: seed spacing `S` in pixels; also the half-width of each
///   cluster's search window.
/// - `min_region_size`: superpixels below this pixel count are folded into a
///   neighbour. `None` means `S² / 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperpixelOptions {
    pub region_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_region_size: Option<usize>,
}

impl Default for SuperpixelOptions {
    fn default() -> Self {
        Self {
            region_size: 40,
            min_region_size: None,
        }
    }
}

impl SuperpixelOptions {
    pub fn with_region_size(mut self, region_size: usize) -> Self {
        self.region_size = region_size;
        self
    }

    pub fn with_min_region_size(mut self, min_region_size: usize) -> Self {
        self.min_region_size = Some(min_region_size);
        self
    }

    /// Effective minimum superpixel size.
    pub fn resolved_min_region_size(&self) -> usize {
        self.min_region_size
            .unwrap_or(self.region_size * self.region_size / 4)
    }

    /// Reject a region size that is zero or larger than either image side.
    pub fn validate(&self, width: usize, height: usize) -> Result<()> {
        if self.region_size == 0 || self.region_size > width || self.region_size > height {
            return Err(SegmentError::InvalidRegionSize {
                region_size: self.region_size,
                width,
                height,
            });
        }
        Ok(())
    }
}
