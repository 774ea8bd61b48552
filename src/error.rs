//! Error type shared by the segmentation entry points.
//!
//! Every variant is raised during validation, before any working buffer is
//! allocated, so a failed call never leaves partial state behind.

/// Result alias for segmentation operations.
pub type Result<T> = std::result::Result<T, SegmentError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SegmentError {
    /// Zero-area input.
    #[error("image has zero area: {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    /// RGBA byte buffer does not match `width * height * 4`.
    #[error("invalid pixel data length: expected {expected} bytes, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },

    /// Negative, non-finite or oversized smoothing sigma.
    #[error("invalid sigma {0}: must lie in [0, 64]")]
    InvalidSigma(f32),

    /// Negative or non-finite merge threshold constant.
    #[error("invalid threshold {0}: must be finite and >= 0")]
    InvalidThreshold(f32),

    /// Superpixel region size is zero or exceeds an image dimension.
    #[error("invalid region size {region_size} for a {width}x{height} image")]
    InvalidRegionSize {
        region_size: usize,
        width: usize,
        height: usize,
    },

    /// Imported label map does not cover the image.
    #[error("label map length mismatch: expected {expected} pixels, got {actual}")]
    LabelMapLength { expected: usize, actual: usize },
}
