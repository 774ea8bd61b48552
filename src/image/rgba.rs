//! Interleaved 8-bit RGBA images: a borrowed view for caller input and an
//! owned buffer for stages that must work on a private copy.
use super::traits::{ImageView, ImageViewMut};
use crate::error::{Result, SegmentError};

/// Borrowed RGBA image, row-major, 4 bytes per pixel.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgba<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgba<'a> {
    /// Wrap a tightly packed RGBA buffer, checking its length.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        let view = Self {
            w,
            h,
            stride: w * 4,
            data,
        };
        view.validate()?;
        Ok(view)
    }

    /// Reject zero-area images and buffers too short for the declared shape.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(SegmentError::EmptyImage {
                width: self.w,
                height: self.h,
            });
        }
        let expected = (self.h - 1) * self.stride + self.w * 4;
        if self.stride < self.w * 4 || self.data.len() < expected {
            return Err(SegmentError::InvalidDataLength {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Copy into a tightly packed owned buffer.
    pub fn to_buffer(&self) -> RgbaBuffer {
        let mut data = Vec::with_capacity(self.w * self.h * 4);
        for row in self.rows() {
            data.extend_from_slice(row);
        }
        RgbaBuffer::from_raw(self.w, self.h, data)
    }
}

impl ImageView for ImageRgba<'_> {
    type Sample = u8;

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
    fn channels(&self) -> usize {
        4
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * 4]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        self.is_contiguous()
            .then_some(&self.data[..self.w * self.h * 4])
    }
}

/// Owned, tightly packed RGBA buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Take ownership of raw bytes. `data.len()` must equal `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * 4);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageRgba` view
    pub fn as_view(&self) -> ImageRgba<'_> {
        ImageRgba {
            w: self.width,
            h: self.height,
            stride: self.width * 4,
            data: &self.data,
        }
    }

    /// Copy out the rectangle `[x0, x0+w) × [y0, y0+h)`, clipped to the image.
    pub fn crop(&self, x0: usize, y0: usize, w: usize, h: usize) -> RgbaBuffer {
        let x1 = (x0 + w).min(self.width);
        let y1 = (y0 + h).min(self.height);
        let (cw, ch) = (x1.saturating_sub(x0), y1.saturating_sub(y0));
        let mut data = Vec::with_capacity(cw * ch * 4);
        for y in y0..y0 + ch {
            let row = self.row(y);
            data.extend_from_slice(&row[x0 * 4..x1 * 4]);
        }
        RgbaBuffer::from_raw(cw, ch, data)
    }
}

impl ImageView for RgbaBuffer {
    type Sample = u8;

    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn stride(&self) -> usize {
        self.width * 4
    }
    fn channels(&self) -> usize {
        4
    }
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width * 4;
        &self.data[start..start + self.width * 4]
    }
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for RgbaBuffer {
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width * 4;
        let end = start + self.width * 4;
        &mut self.data[start..end]
    }
}
