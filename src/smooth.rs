//! Separable Gaussian smoothing of the colour channels of an RGBA buffer.
//!
//! Design
//! - The kernel is stored as a half kernel `k[0..=r]` with `r = ceil(4σ)` and
//!   `k[i] = exp(-½ (i/σ)²)`, normalized so that the mirrored full kernel
//!   `k[r], …, k[1], k[0], k[1], …, k[r]` sums to one.
//! - Filtering runs as a horizontal pass followed by a vertical pass on each
//!   of R, G and B; alpha is left untouched.
//! - Border taps clamp to the nearest valid pixel (replicate border), so flat
//!   regions touching the image edge keep their value.
//! - Results are rounded back into the 8-bit buffer in place; callers hand in
//!   a private copy.
//!
//! Complexity: O(W·H·r) per channel.
use crate::error::{Result, SegmentError};
use crate::image::{ImageF32, ImageView, ImageViewMut, RgbaBuffer};

/// Smallest sigma used to build a kernel; smaller inputs are raised to it.
pub const MIN_SIGMA: f32 = 0.01;

/// Largest accepted sigma. The kernel radius `ceil(4σ)` stays at most 256 taps.
pub const MAX_SIGMA: f32 = 64.0;

/// Trait implemented by symmetric separable 1D filters.
pub trait SeparableFilter {
    /// Half kernel: `taps()[0]` weighs the centre sample, `taps()[i]` both
    /// samples at distance `i`.
    fn taps(&self) -> &[f32];
}

/// Normalized Gaussian half kernel.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    sigma: f32,
    taps: Vec<f32>,
}

impl GaussianKernel {
    pub fn new(sigma: f32) -> Result<Self> {
        if !sigma.is_finite() || !(0.0..=MAX_SIGMA).contains(&sigma) {
            return Err(SegmentError::InvalidSigma(sigma));
        }
        let sigma = sigma.max(MIN_SIGMA);
        let len = (4.0 * sigma).ceil() as usize + 1;
        let mut taps: Vec<f32> = (0..len)
            .map(|i| {
                let r = i as f32 / sigma;
                (-0.5 * r * r).exp()
            })
            .collect();
        let sum = 2.0 * taps.iter().sum::<f32>() - taps[0];
        for t in &mut taps {
            *t /= sum;
        }
        Ok(Self { sigma, taps })
    }

    /// Effective sigma after flooring.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Apply `filter` horizontally, then vertically, with replicate borders.
pub fn convolve_separable(filter: &dyn SeparableFilter, input: &ImageF32) -> ImageF32 {
    let taps = filter.taps();
    let (w, h) = (input.w, input.h);
    let mut tmp = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return tmp;
    }
    // horizontal
    for y in 0..h {
        let src = input.row(y);
        let dst = tmp.row_mut(y);
        for (x, out) in dst.iter_mut().enumerate() {
            let mut acc = taps[0] * src[x];
            for (i, &t) in taps.iter().enumerate().skip(1) {
                acc += t * (src[x.saturating_sub(i)] + src[(x + i).min(w - 1)]);
            }
            *out = acc;
        }
    }
    // vertical
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        for (d, &s) in dst.iter_mut().zip(tmp.row(y)) {
            *d = taps[0] * s;
        }
        for (i, &t) in taps.iter().enumerate().skip(1) {
            let up = tmp.row(y.saturating_sub(i));
            let down = tmp.row((y + i).min(h - 1));
            for ((d, &a), &b) in dst.iter_mut().zip(up).zip(down) {
                *d += t * (a + b);
            }
        }
    }
    out
}

/// Smooth R, G and B of `buffer` in place.
pub fn smooth_rgba(buffer: &mut RgbaBuffer, filter: &dyn SeparableFilter) {
    for channel in 0..3 {
        let plane = ImageF32::from_rgba_channel(&buffer.as_view(), channel);
        let smoothed = convolve_separable(filter, &plane);
        smoothed.store_rgba_channel(buffer, channel);
    }
}
