//! Sparse pixel graph: each pixel links to its right, bottom, bottom-right and
//! bottom-left neighbours, so every 8-adjacent pair appears exactly once.
use crate::image::{ImageRgba, ImageView};

/// Undirected edge between two pixel indices (`p = y * W + x`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelEdge {
    pub a: u32,
    pub b: u32,
    pub weight: f32,
}

/// Closed-form size of the edge set, `4WH − 3W − 3H + 2`.
pub fn edge_count(w: usize, h: usize) -> usize {
    if w == 0 || h == 0 {
        return 0;
    }
    4 * w * h + 2 - 3 * w - 3 * h
}

#[inline]
fn rgb_distance(p: &[u8], q: &[u8]) -> f32 {
    let dr = f32::from(p[0]) - f32::from(q[0]);
    let dg = f32::from(p[1]) - f32::from(q[1]);
    let db = f32::from(p[2]) - f32::from(q[2]);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Enumerate the neighbour edges of `image`, weighted by Euclidean RGB
/// distance (alpha ignored). Order is row-major by the first endpoint.
pub fn build_edges(image: &ImageRgba<'_>) -> Vec<PixelEdge> {
    let (w, h) = (image.w, image.h);
    let mut edges = Vec::with_capacity(edge_count(w, h));
    for y in 0..h {
        let row = image.row(y);
        let below = (y + 1 < h).then(|| image.row(y + 1));
        for x in 0..w {
            let p = &row[x * 4..x * 4 + 4];
            let a = (y * w + x) as u32;
            let mut push = |b: usize, q: &[u8]| {
                edges.push(PixelEdge {
                    a,
                    b: b as u32,
                    weight: rgb_distance(p, q),
                });
            };
            if x + 1 < w {
                push(y * w + x + 1, &row[(x + 1) * 4..(x + 2) * 4]);
            }
            if let Some(below) = below {
                let yb = y + 1;
                push(yb * w + x, &below[x * 4..x * 4 + 4]);
                if x + 1 < w {
                    push(yb * w + x + 1, &below[(x + 1) * 4..(x + 2) * 4]);
                }
                if x > 0 {
                    push(yb * w + x - 1, &below[(x - 1) * 4..x * 4]);
                }
            }
        }
    }
    edges
}

/// Sort ascending by weight. Ties keep enumeration order.
pub fn sort_edges(edges: &mut [PixelEdge]) {
    edges.sort_by(|l, r| l.weight.total_cmp(&r.weight));
}
