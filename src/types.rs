use crate::image::{ImageRgba, ImageView};
use serde::{Deserialize, Serialize};

/// Dense label map handed to annotators.
///
/// `index_map` has one entry per pixel (row-major) with values covering
/// exactly `0..size`. `rgba_copy` optionally carries the source pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResult {
    pub width: usize,
    pub height: usize,
    pub size: usize,
    pub index_map: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgba_copy: Option<Vec<u8>>,
}

impl SegmentationResult {
    /// Attach a tightly packed copy of `image` as `rgba_copy`.
    pub fn with_rgba(mut self, image: &ImageRgba<'_>) -> Self {
        let mut data = Vec::with_capacity(image.pixel_count() * 4);
        for row in image.rows() {
            data.extend_from_slice(row);
        }
        self.rgba_copy = Some(data);
        self
    }

    /// Pixel indices belonging to each segment, in scan order.
    pub fn segment_pixels(&self) -> Vec<Vec<usize>> {
        let mut index = vec![Vec::new(); self.size];
        for (p, &label) in self.index_map.iter().enumerate() {
            if let Some(bucket) = usize::try_from(label).ok().and_then(|l| index.get_mut(l)) {
                bucket.push(p);
            }
        }
        index
    }

    /// Pixel count per segment.
    pub fn segment_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.size];
        for &label in &self.index_map {
            if let Some(s) = usize::try_from(label).ok().and_then(|l| sizes.get_mut(l)) {
                *s += 1;
            }
        }
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SegmentationResult {
        SegmentationResult {
            width: 3,
            height: 1,
            size: 2,
            index_map: vec![0, 1, 0],
            rgba_copy: None,
        }
    }

    #[test]
    fn segment_index_groups_pixels() {
        let r = sample();
        assert_eq!(r.segment_pixels(), vec![vec![0, 2], vec![1]]);
        assert_eq!(r.segment_sizes(), vec![2, 1]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["indexMap"], serde_json::json!([0, 1, 0]));
        assert!(json.get("rgbaCopy").is_none());
    }
}
