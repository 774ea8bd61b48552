use serde::Serialize;

/// Initial squared colour scale of every cluster (a Lab distance of 10).
pub const INITIAL_COLOR_SCALE: f32 = 10.0 * 10.0;

/// Cluster centre in image + Lab space: the running mean of its members.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClusterCenter {
    pub x: f32,
    pub y: f32,
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl ClusterCenter {
    #[inline]
    pub fn as_array(&self) -> [f32; 5] {
        [self.x, self.y, self.l, self.a, self.b]
    }

    #[inline]
    pub fn from_array(v: [f32; 5]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            l: v[2],
            a: v[3],
            b: v[4],
        }
    }

    /// Squared Lab distance to a pixel colour.
    #[inline]
    pub fn color_dist2(&self, lab: [f32; 3]) -> f32 {
        let dl = lab[0] - self.l;
        let da = lab[1] - self.a;
        let db = lab[2] - self.b;
        dl * dl + da * da + db * db
    }

    /// Squared image-plane distance to a pixel position.
    #[inline]
    pub fn spatial_dist2(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy
    }

    /// Sum of absolute coordinate differences to `other`.
    pub fn l1_distance(&self, other: &ClusterCenter) -> f32 {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .map(|(p, q)| (p - q).abs())
            .sum()
    }
}

/// Per-cluster normalization scales: the largest squared colour and spatial
/// distances observed between the cluster and one of its members.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterAdaptation {
    pub max_color: f32,
    pub max_spatial: f32,
}

impl ClusterAdaptation {
    /// Starting scales `10²` for colour and `S²` for space, so the first round
    /// weighs the two like plain SLIC with compactness 10.
    pub fn new(region_size: usize) -> Self {
        let s = region_size as f32;
        Self {
            max_color: INITIAL_COLOR_SCALE,
            max_spatial: s * s,
        }
    }

    /// Normalized joint distance `sqrt(dc²/mc + ds²/ms)`.
    #[inline]
    pub fn distance(&self, color_dist2: f32, spatial_dist2: f32) -> f32 {
        (color_dist2 / self.max_color + spatial_dist2 / self.max_spatial).sqrt()
    }

    /// Raise the scales to cover a member at the given squared distances.
    #[inline]
    pub fn observe(&mut self, color_dist2: f32, spatial_dist2: f32) {
        if color_dist2 > self.max_color {
            self.max_color = color_dist2;
        }
        if spatial_dist2 > self.max_spatial {
            self.max_spatial = spatial_dist2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptation_only_grows() {
        let mut p = ClusterAdaptation::new(4);
        assert_eq!((p.max_color, p.max_spatial), (100.0, 16.0));
        p.observe(50.0, 25.0);
        assert_eq!((p.max_color, p.max_spatial), (100.0, 25.0));
        p.observe(400.0, 1.0);
        assert_eq!((p.max_color, p.max_spatial), (400.0, 25.0));
    }

    #[test]
    fn distance_is_normalized_per_cluster() {
        let p = ClusterAdaptation::new(10);
        assert!((p.distance(100.0, 100.0) - 2.0f32.sqrt()).abs() < 1e-6);
    }
}
