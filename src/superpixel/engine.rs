//! Locally windowed, self-normalizing k-means over (x, y, L, a, b).
//!
//! Each round:
//! 1. Assignment: every centre scans `[cx−S, cx+S) × [cy−S, cy+S)` around its
//!    rounded position and claims pixels for which its normalized distance
//!    `sqrt(dc²/mc + ds²/ms)` beats the best seen so far this round.
//! 2. Adaptation: every assigned pixel raises its cluster's `mc`/`ms` when its
//!    own squared distances exceed them.
//! 3. Update: centres move to the mean of their members; empty clusters keep
//!    their previous value.
//! 4. Convergence: stop once the summed absolute centre displacement drops
//!    below `RESIDUAL_EPSILON`, or after `MAX_ITERATIONS` rounds.
//!
//! Pixels that no window reaches in a round keep their previous label; the
//! initial labels are the seed-grid cells.
use super::cluster::{ClusterAdaptation, ClusterCenter};
use super::seeds::SeedGrid;
use crate::color::LabImage;
use log::debug;

pub const MAX_ITERATIONS: usize = 10;
pub const RESIDUAL_EPSILON: f32 = 1e-5;

/// Final assignment and convergence state of one clustering run.
#[derive(Clone, Debug)]
pub struct ClusterOutcome {
    pub labels: Vec<i32>,
    pub centers: Vec<ClusterCenter>,
    pub iterations: usize,
    pub residual: f32,
    pub converged: bool,
}

/// Per-run buffers, allocated once and reused across rounds.
pub struct ClusterEngine<'a> {
    lab: &'a LabImage,
    grid: SeedGrid,
    centers: Vec<ClusterCenter>,
    params: Vec<ClusterAdaptation>,
    labels: Vec<i32>,
    distance: Vec<f32>,
    color_dist: Vec<f32>,
    spatial_dist: Vec<f32>,
}

impl<'a> ClusterEngine<'a> {
    pub fn new(lab: &'a LabImage, grid: SeedGrid, centers: Vec<ClusterCenter>) -> Self {
        let (w, h) = (lab.w, lab.h);
        let n = w * h;
        let mut labels = vec![0i32; n];
        for y in 0..h {
            for x in 0..w {
                labels[y * w + x] = grid.cell_of(x, y) as i32;
            }
        }
        let params = vec![ClusterAdaptation::new(grid.region_size); centers.len()];
        Self {
            lab,
            grid,
            centers,
            params,
            labels,
            distance: vec![f32::INFINITY; n],
            color_dist: vec![0.0; n],
            spatial_dist: vec![0.0; n],
        }
    }

    pub fn run(mut self) -> ClusterOutcome {
        let mut iterations = 0;
        let mut residual = f32::INFINITY;
        while iterations < MAX_ITERATIONS {
            self.assign();
            self.adapt();
            let updated = self.update_centers();
            residual = self
                .centers
                .iter()
                .zip(&updated)
                .map(|(prev, next)| prev.l1_distance(next))
                .sum();
            self.centers = updated;
            iterations += 1;
            debug!(
                "ClusterEngine::run iteration={} residual={:.6}",
                iterations, residual
            );
            if residual < RESIDUAL_EPSILON {
                break;
            }
        }
        ClusterOutcome {
            labels: self.labels,
            centers: self.centers,
            iterations,
            residual,
            converged: residual < RESIDUAL_EPSILON,
        }
    }

    fn assign(&mut self) {
        let (w, h) = (self.lab.w, self.lab.h);
        let n = w * h;
        let s = self.grid.region_size as isize;
        self.distance.fill(f32::INFINITY);
        let data = &self.lab.data;
        for (k, center) in self.centers.iter().enumerate() {
            let param = self.params[k];
            let cx = center.x.round() as isize;
            let cy = center.y.round() as isize;
            let y0 = (cy - s).max(0) as usize;
            let y1 = (cy + s).clamp(0, h as isize) as usize;
            let x0 = (cx - s).max(0) as usize;
            let x1 = (cx + s).clamp(0, w as isize) as usize;
            for y in y0..y1 {
                for x in x0..x1 {
                    let i = y * w + x;
                    let dc = center.color_dist2([data[i], data[n + i], data[2 * n + i]]);
                    let ds = center.spatial_dist2(x as f32, y as f32);
                    let d = param.distance(dc, ds);
                    if d < self.distance[i] {
                        self.distance[i] = d;
                        self.labels[i] = k as i32;
                        self.color_dist[i] = dc;
                        self.spatial_dist[i] = ds;
                    }
                }
            }
        }
    }

    fn adapt(&mut self) {
        for (i, &label) in self.labels.iter().enumerate() {
            if self.distance[i].is_finite() {
                self.params[label as usize].observe(self.color_dist[i], self.spatial_dist[i]);
            }
        }
    }

    fn update_centers(&self) -> Vec<ClusterCenter> {
        let (w, n) = (self.lab.w, self.lab.w * self.lab.h);
        let k = self.centers.len();
        let mut sums = vec![[0.0f64; 5]; k];
        let mut mass = vec![0usize; k];
        let data = &self.lab.data;
        for (i, &label) in self.labels.iter().enumerate() {
            let c = label as usize;
            let acc = &mut sums[c];
            acc[0] += (i % w) as f64;
            acc[1] += (i / w) as f64;
            acc[2] += f64::from(data[i]);
            acc[3] += f64::from(data[n + i]);
            acc[4] += f64::from(data[2 * n + i]);
            mass[c] += 1;
        }
        self.centers
            .iter()
            .zip(sums.iter().zip(&mass))
            .map(|(prev, (sum, &m))| {
                if m == 0 {
                    return *prev;
                }
                let m = m as f64;
                ClusterCenter::from_array(sum.map(|v| (v / m) as f32))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_lab(w: usize, h: usize) -> LabImage {
        LabImage {
            w,
            h,
            data: vec![50.0; 3 * w * h],
        }
    }

    #[test]
    fn uniform_image_converges_to_quadrants() {
        let lab = flat_lab(80, 80);
        let grid = SeedGrid::new(80, 80, 40);
        let centers = (0..4)
            .map(|k| ClusterCenter {
                x: 19.0 + 40.0 * (k % 2) as f32,
                y: 19.0 + 40.0 * (k / 2) as f32,
                l: 50.0,
                a: 50.0,
                b: 50.0,
            })
            .collect();
        let out = ClusterEngine::new(&lab, grid, centers).run();
        assert!(out.converged, "residual={}", out.residual);
        assert!(out.iterations <= MAX_ITERATIONS);
        assert_eq!(out.labels[0], 0);
        assert_eq!(out.labels[79], 1);
        assert_eq!(out.labels[79 * 80], 2);
        assert_eq!(out.labels[80 * 80 - 1], 3);
        assert!((out.centers[0].x - 19.5).abs() < 1e-4);
    }

    #[test]
    fn empty_cluster_keeps_its_center() {
        // Second centre sits far outside reach of every pixel's best match.
        let lab = flat_lab(4, 4);
        let grid = SeedGrid::new(4, 4, 4);
        let lonely = ClusterCenter {
            x: 1.0,
            y: 1.0,
            l: 50.0,
            a: 50.0,
            b: 50.0,
        };
        let ghost = ClusterCenter {
            x: 1.0,
            y: 1.0,
            l: 900.0,
            a: 900.0,
            b: 900.0,
        };
        let engine = ClusterEngine::new(&lab, grid, vec![lonely, ghost]);
        let out = engine.run();
        assert!(out.labels.iter().all(|&l| l == 0));
        assert_eq!(out.centers[1], ghost);
    }
}
