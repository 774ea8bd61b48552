//! Small-region elimination on a label map.
//!
//! A forward scan flood-fills each unvisited 4-connected same-label
//! component. Components smaller than the minimum take the label of an
//! already-visited neighbouring component. A small component with no visited
//! neighbour (e.g. one touching only later pixels) is handed to an adjacent
//! unvisited component instead and left unvisited, so that component's own
//! fill picks it up and counts it.
//!
//! A second sweep with deferral disabled then fills any pixel still
//! unvisited. Every component is finalized exactly once across both sweeps;
//! the second one only sees deferred leftovers.
use log::debug;

/// Outcome counters of one elimination run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EliminationStats {
    /// Components visited by a flood fill.
    pub components: usize,
    /// Small components relabeled into a visited neighbour.
    pub absorbed: usize,
    /// Small components deferred to an unvisited neighbour.
    pub deferred: usize,
}

struct Sweep<'a> {
    labels: &'a mut [i32],
    w: usize,
    h: usize,
    min_size: usize,
    // 0 = unvisited, otherwise 1-based component stamp
    stamp: Vec<u32>,
    next_stamp: u32,
    stack: Vec<usize>,
    component: Vec<usize>,
    stats: EliminationStats,
}

fn neighbours4(p: usize, w: usize, h: usize) -> impl Iterator<Item = usize> {
    let (x, y) = (p % w, p / w);
    [
        (x > 0).then(|| p - 1),
        (x + 1 < w).then(|| p + 1),
        (y > 0).then(|| p - w),
        (y + 1 < h).then(|| p + w),
    ]
    .into_iter()
    .flatten()
}

impl Sweep<'_> {
    fn fill(&mut self, start: usize, allow_defer: bool) {
        let label = self.labels[start];
        let current = self.next_stamp;
        self.next_stamp += 1;
        self.stamp[start] = current;
        self.stack.clear();
        self.component.clear();
        self.stack.push(start);

        let mut absorbing: Option<i32> = None;
        let mut adjacent: Option<i32> = None;
        while let Some(p) = self.stack.pop() {
            self.component.push(p);
            for q in neighbours4(p, self.w, self.h) {
                let s = self.stamp[q];
                if s == 0 {
                    if self.labels[q] == label {
                        self.stamp[q] = current;
                        self.stack.push(q);
                    } else if adjacent.is_none() {
                        adjacent = Some(self.labels[q]);
                    }
                } else if s != current && absorbing.is_none() {
                    absorbing = Some(self.labels[q]);
                }
            }
        }
        self.stats.components += 1;

        if self.component.len() >= self.min_size {
            return;
        }
        if let Some(target) = absorbing {
            for &p in &self.component {
                self.labels[p] = target;
            }
            self.stats.absorbed += 1;
        } else if let (true, Some(target)) = (allow_defer, adjacent) {
            for &p in &self.component {
                self.labels[p] = target;
                self.stamp[p] = 0;
            }
            self.stats.deferred += 1;
        }
    }
}

/// Relabel every 4-connected component smaller than `min_size` pixels into an
/// adjacent component. Returns counters for logging.
pub fn eliminate_small_regions(
    labels: &mut [i32],
    w: usize,
    h: usize,
    min_size: usize,
) -> EliminationStats {
    debug_assert_eq!(labels.len(), w * h);
    let n = w * h;
    let mut sweep = Sweep {
        labels,
        w,
        h,
        min_size,
        stamp: vec![0; n],
        next_stamp: 1,
        stack: Vec::new(),
        component: Vec::new(),
        stats: EliminationStats::default(),
    };
    for p in 0..n {
        if sweep.stamp[p] == 0 {
            sweep.fill(p, true);
        }
    }
    // Deferred pixels that no later fill reached.
    for p in 0..n {
        if sweep.stamp[p] == 0 {
            sweep.fill(p, false);
        }
    }
    let stats = sweep.stats;
    debug!(
        "eliminate_small_regions: min_size={} components={} absorbed={} deferred={}",
        min_size, stats.components, stats.absorbed, stats.deferred
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_pixel_takes_surrounding_label() {
        let (w, h) = (5, 5);
        let mut labels = vec![3; w * h];
        labels[2 * w + 2] = 9;
        let stats = eliminate_small_regions(&mut labels, w, h, 2);
        assert_eq!(labels, vec![3; w * h]);
        assert_eq!(stats.absorbed, 1);
    }

    #[test]
    fn small_component_at_scan_start_is_deferred_then_merged() {
        let (w, h) = (4, 3);
        let mut labels = vec![1; w * h];
        labels[0] = 7;
        eliminate_small_regions(&mut labels, w, h, 3);
        assert_eq!(labels, vec![1; w * h]);
    }

    #[test]
    fn large_components_are_untouched() {
        let (w, h) = (6, 2);
        let mut labels: Vec<i32> = (0..w * h).map(|i| if i % w < 3 { 4 } else { 8 }).collect();
        let before = labels.clone();
        let stats = eliminate_small_regions(&mut labels, w, h, 6);
        assert_eq!(labels, before);
        assert_eq!(stats.components, 2);
        assert_eq!(stats.absorbed + stats.deferred, 0);
    }

    #[test]
    fn whole_image_below_minimum_stays_single_segment() {
        let mut labels = vec![5; 4];
        eliminate_small_regions(&mut labels, 2, 2, 20);
        assert_eq!(labels, vec![5; 4]);
    }

    #[test]
    fn diagonal_only_contact_is_not_connectivity() {
        // 2 at (0,0) and (1,1) touch only diagonally.
        let mut labels = vec![2, 0, 0, 0, 2, 0, 0, 0, 0];
        eliminate_small_regions(&mut labels, 3, 3, 2);
        assert!(labels.iter().all(|&l| l == 0), "{labels:?}");
    }
}
