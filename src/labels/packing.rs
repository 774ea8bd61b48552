//! Packing of segment labels into RGB pixels for persisted annotations.
//!
//! A label `L` is stored as `(L & 255, (L >> 8) & 255, (L >> 16) & 255)`;
//! alpha is always opaque. Labels are limited to 24 bits.
use crate::error::{Result, SegmentError};
use crate::image::{ImageRgba, ImageView, RgbaBuffer};

#[inline]
pub fn encode_label(label: u32) -> [u8; 3] {
    [
        (label & 255) as u8,
        ((label >> 8) & 255) as u8,
        ((label >> 16) & 255) as u8,
    ]
}

#[inline]
pub fn decode_label(rgb: [u8; 3]) -> u32 {
    u32::from(rgb[0]) | (u32::from(rgb[1]) << 8) | (u32::from(rgb[2]) << 16)
}

/// Encode a `w × h` label map as an opaque RGBA image.
pub fn encode_label_map(labels: &[i32], w: usize, h: usize) -> Result<RgbaBuffer> {
    if labels.len() != w * h {
        return Err(SegmentError::LabelMapLength {
            expected: w * h,
            actual: labels.len(),
        });
    }
    let mut data = Vec::with_capacity(labels.len() * 4);
    for &label in labels {
        let [r, g, b] = encode_label(label.max(0) as u32);
        data.extend_from_slice(&[r, g, b, 255]);
    }
    Ok(RgbaBuffer::from_raw(w, h, data))
}

/// Decode an RGBA label image back into raw labels, ignoring alpha.
pub fn decode_label_map(image: &ImageRgba<'_>) -> Vec<i32> {
    let mut labels = Vec::with_capacity(image.pixel_count());
    for row in image.rows() {
        labels.extend(
            row.chunks_exact(4)
                .map(|px| decode_label([px[0], px[1], px[2]]) as i32),
        );
    }
    labels
}
