//! Owned single-channel f32 plane in row-major layout (stride == width).
//!
//! Used for smoothing scratch planes and the gradient-magnitude map.
use super::rgba::{ImageRgba, RgbaBuffer};
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Extract one interleaved channel of an RGBA view as a float plane.
    pub fn from_rgba_channel(image: &ImageRgba<'_>, channel: usize) -> Self {
        let mut out = Self::new(image.w, image.h);
        for y in 0..image.h {
            let src = image.row(y);
            let dst = out.row_mut(y);
            for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
                *d = f32::from(px[channel]);
            }
        }
        out
    }

    /// Round and clamp the plane back into one channel of an RGBA buffer.
    pub fn store_rgba_channel(&self, buffer: &mut RgbaBuffer, channel: usize) {
        for y in 0..self.h {
            let src = self.row(y);
            let dst = buffer.row_mut(y);
            for (px, &v) in dst.chunks_exact_mut(4).zip(src) {
                px[channel] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

impl ImageView for ImageF32 {
    type Sample = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
