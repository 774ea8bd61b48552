//! Disjoint-set forest with union-by-rank, path compression and a per-root
//! adaptive merge threshold.
//!
//! Storage is struct-of-arrays indexed by pixel. `size` and `threshold` are
//! only meaningful at roots; query them through `find`.
use super::edges::PixelEdge;

#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<u32>,
    rank: Vec<u8>,
    size: Vec<u32>,
    threshold: Vec<f32>,
    components: usize,
}

impl DisjointSetForest {
    /// `n` singleton components, each with threshold `c`.
    pub fn new(n: usize, c: f32) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            threshold: vec![c; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of live components.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Root of `i`, compressing the path on the way.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }
        let mut cur = i;
        while self.parent[cur] as usize != root {
            let next = self.parent[cur] as usize;
            self.parent[cur] = root as u32;
            cur = next;
        }
        root
    }

    /// Pixel count of the component rooted at `root`.
    #[inline]
    pub fn size(&self, root: usize) -> usize {
        self.size[root] as usize
    }

    #[inline]
    pub fn threshold(&self, root: usize) -> f32 {
        self.threshold[root]
    }

    /// Join two distinct roots and return the surviving root.
    ///
    /// The lower-rank root goes under the higher-rank one; on a tie `a` goes
    /// under `b` and `b`'s rank grows.
    pub fn union_roots(&mut self, a: usize, b: usize) -> usize {
        debug_assert!(a != b);
        let (child, root) = if self.rank[a] > self.rank[b] {
            (b, a)
        } else {
            if self.rank[a] == self.rank[b] {
                self.rank[b] += 1;
            }
            (a, b)
        };
        self.parent[child] = root as u32;
        self.size[root] += self.size[child];
        self.components -= 1;
        root
    }

    /// Join the components of `a` and `b`; no-op when already joined.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            ra
        } else {
            self.union_roots(ra, rb)
        }
    }

    /// Felzenszwalb–Huttenlocher merge over edges sorted by ascending weight.
    ///
    /// An edge joins two components when its weight does not exceed either
    /// root's threshold; the merged root then gets `w + c / size`.
    pub fn merge_sorted_edges(&mut self, edges: &[PixelEdge], c: f32) {
        for e in edges {
            let ra = self.find(e.a as usize);
            let rb = self.find(e.b as usize);
            if ra == rb || e.weight > self.threshold[ra] || e.weight > self.threshold[rb] {
                continue;
            }
            let root = self.union_roots(ra, rb);
            self.threshold[root] = e.weight + c / self.size[root] as f32;
        }
    }

    /// Second pass over the same edge order: join any pair of components where
    /// either side is smaller than `min_size`, regardless of weight.
    pub fn absorb_small_components(&mut self, edges: &[PixelEdge], min_size: usize) {
        for e in edges {
            let ra = self.find(e.a as usize);
            let rb = self.find(e.b as usize);
            if ra != rb && (self.size(ra) < min_size || self.size(rb) < min_size) {
                self.union_roots(ra, rb);
            }
        }
    }

    /// Root id of every element, in index order.
    pub fn root_labels(&mut self) -> Vec<i32> {
        (0..self.len()).map(|p| self.find(p) as i32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: u32, b: u32, weight: f32) -> PixelEdge {
        PixelEdge { a, b, weight }
    }

    #[test]
    fn union_find_groups_elements() {
        let mut f = DisjointSetForest::new(5, 1.0);
        assert_ne!(f.find(0), f.find(1));
        f.union(0, 1);
        assert_eq!(f.find(0), f.find(1));
        f.union(2, 3);
        assert_ne!(f.find(0), f.find(2));
        f.union(1, 2);
        assert_eq!(f.find(0), f.find(3));
        assert_eq!(f.components(), 2);
        let r = f.find(3);
        assert_eq!(f.size(r), 4);
    }

    #[test]
    fn rank_tie_attaches_first_under_second() {
        let mut f = DisjointSetForest::new(2, 1.0);
        let root = f.union_roots(0, 1);
        assert_eq!(root, 1);
        assert_eq!(f.find(0), 1);
        // Higher rank wins regardless of argument order.
        let mut g = DisjointSetForest::new(3, 1.0);
        g.union_roots(0, 1);
        assert_eq!(g.union_roots(1, 2), 1);
    }

    #[test]
    fn merge_respects_adaptive_threshold() {
        // 0 -1.0- 1 -5.0- 2 with c = 4: first edge merges (1 <= 4), the
        // second fails against the merged threshold 1 + 4/2 = 3.
        let mut f = DisjointSetForest::new(3, 4.0);
        f.merge_sorted_edges(&[edge(0, 1, 1.0), edge(1, 2, 5.0)], 4.0);
        assert_eq!(f.components(), 2);
        let r = f.find(0);
        assert!((f.threshold(r) - 3.0).abs() < 1e-6);
        assert_ne!(f.find(1), f.find(2));
    }

    #[test]
    fn cleanup_pass_ignores_weights() {
        let edges = [edge(0, 1, 0.0), edge(1, 2, 100.0)];
        let mut f = DisjointSetForest::new(3, 1.0);
        f.merge_sorted_edges(&edges, 1.0);
        assert_eq!(f.components(), 2);
        f.absorb_small_components(&edges, 2);
        assert_eq!(f.components(), 1);
    }
}
