//! RGB → CIE-Lab conversion for the superpixel path.
//!
//! Bytes are scaled to [0,1] and linearized with a plain 2.2 gamma, mapped to
//! XYZ through the CIE RGB primaries and converted to Lab under an
//! equal-energy white (`Xw = Yw = Zw = 1`). The companding function uses the
//! practical breakpoint `t = 0.00856`.
//!
//! Output planes are stored channel-major in one buffer:
//! `data[plane * W * H + y * W + x]`.
use crate::image::{ImageRgba, ImageView};
use nalgebra::{Matrix3, Vector3};

const GAMMA: f32 = 2.2;
const LAB_BREAKPOINT: f32 = 0.00856;
const LAB_SLOPE: f32 = 7.787_068_9;
const LAB_OFFSET: f32 = 16.0 / 116.0;

fn rgb_to_xyz() -> Matrix3<f32> {
    Matrix3::new(
        0.488_718, 0.310_680, 0.200_602, //
        0.176_204, 0.812_985, 0.010_810_9, //
        0.0, 0.010_204_8, 0.989_795,
    )
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_BREAKPOINT {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

/// Linearize an sRGB-like byte triple and map it to XYZ.
pub fn rgb_to_xyz_pixel(rgb: [u8; 3], matrix: &Matrix3<f32>) -> Vector3<f32> {
    let lin = Vector3::from_iterator(rgb.iter().map(|&c| (f32::from(c) / 255.0).powf(GAMMA)));
    matrix * lin
}

/// Map XYZ under an equal-energy white to `[L, a, b]`.
pub fn xyz_to_lab(xyz: Vector3<f32>) -> [f32; 3] {
    let fx = lab_f(xyz.x);
    let fy = lab_f(xyz.y);
    let fz = lab_f(xyz.z);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Three Lab planes of a `w × h` image, channel-major.
#[derive(Clone, Debug)]
pub struct LabImage {
    pub w: usize,
    pub h: usize,
    pub data: Vec<f32>,
}

impl LabImage {
    pub fn from_rgba(image: &ImageRgba<'_>) -> Self {
        let (w, h) = (image.w, image.h);
        let n = w * h;
        let matrix = rgb_to_xyz();
        let mut data = vec![0.0f32; 3 * n];
        for (y, row) in image.rows().enumerate() {
            for (x, px) in row.chunks_exact(4).enumerate() {
                let lab = xyz_to_lab(rgb_to_xyz_pixel([px[0], px[1], px[2]], &matrix));
                let i = y * w + x;
                data[i] = lab[0];
                data[n + i] = lab[1];
                data[2 * n + i] = lab[2];
            }
        }
        Self { w, h, data }
    }

    #[inline]
    pub fn plane(&self, k: usize) -> &[f32] {
        let n = self.w * self.h;
        &self.data[k * n..(k + 1) * n]
    }

    #[inline]
    pub fn lab(&self, i: usize) -> [f32; 3] {
        let n = self.w * self.h;
        [self.data[i], self.data[n + i], self.data[2 * n + i]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab_of(rgb: [u8; 3]) -> [f32; 3] {
        xyz_to_lab(rgb_to_xyz_pixel(rgb, &rgb_to_xyz()))
    }

    #[test]
    fn black_and_white_hit_the_lightness_extremes() {
        let black = lab_of([0, 0, 0]);
        assert!(black[0].abs() < 1e-3, "L(black)={}", black[0]);
        let white = lab_of([255, 255, 255]);
        assert!((white[0] - 100.0).abs() < 1e-2, "L(white)={}", white[0]);
        // Equal-energy white: neutral axis carries no chroma.
        assert!(white[1].abs() < 0.1 && white[2].abs() < 0.1, "{white:?}");
    }

    #[test]
    fn red_has_positive_a() {
        let red = lab_of([255, 0, 0]);
        assert!(red[1] > 0.0);
    }

    #[test]
    fn planes_are_channel_major() {
        let data = [255u8, 255, 255, 255, 0, 0, 0, 255];
        let img = ImageRgba::new(2, 1, &data).unwrap();
        let lab = LabImage::from_rgba(&img);
        assert_eq!(lab.data.len(), 6);
        assert!(lab.plane(0)[0] > 99.0);
        assert!(lab.plane(0)[1].abs() < 1e-3);
        assert_eq!(lab.lab(1)[0], lab.data[1]);
    }
}
