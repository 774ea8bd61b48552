//! Regular seed grid with gradient-based snapping.
use super::cluster::ClusterCenter;
use crate::color::LabImage;
use crate::image::ImageF32;

/// Seed lattice: `nx × ny` cells of side `region_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedGrid {
    pub nx: usize,
    pub ny: usize,
    pub region_size: usize,
}

impl SeedGrid {
    /// `floor(W / S) × floor(H / S)`, at least one cell per axis.
    pub fn new(width: usize, height: usize, region_size: usize) -> Self {
        let s = region_size.max(1);
        Self {
            nx: (width / s).max(1),
            ny: (height / s).max(1),
            region_size: s,
        }
    }

    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid cell containing pixel `(x, y)`, clamped to the lattice.
    #[inline]
    pub fn cell_of(&self, x: usize, y: usize) -> usize {
        let u = (x / self.region_size).min(self.nx - 1);
        let v = (y / self.region_size).min(self.ny - 1);
        v * self.nx + u
    }

    /// Place one centre per cell at `round(S·(u+½)), round(S·(v+½))`, moved
    /// to the lowest-gradient pixel of its 3×3 neighbourhood.
    pub fn place(&self, lab: &LabImage, gradient: &ImageF32) -> Vec<ClusterCenter> {
        let (w, h) = (lab.w, lab.h);
        let s = self.region_size as f32;
        let mut centers = Vec::with_capacity(self.len());
        for v in 0..self.ny {
            for u in 0..self.nx {
                let x = ((s * (u as f32 + 0.5)).round() as usize).min(w - 1);
                let y = ((s * (v as f32 + 0.5)).round() as usize).min(h - 1);
                let (mut cx, mut cy) = (x, y);
                let mut best = f32::INFINITY;
                for yp in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                    for xp in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                        let g = gradient.get(xp, yp);
                        if g < best {
                            best = g;
                            cx = xp;
                            cy = yp;
                        }
                    }
                }
                let [l, a, b] = lab.lab(cy * w + cx);
                centers.push(ClusterCenter {
                    x: cx as f32,
                    y: cy as f32,
                    l,
                    a,
                    b,
                });
            }
        }
        centers
    }
}
