//! Gradient-energy map over the Lab planes.
//!
//! For each interior pixel the squared central differences
//! `(left − right)² + (up − down)²` of L, a and b are summed into one map.
//! The 1-pixel border stays zero. The map is only used to move seeds off
//! strong edges.
use crate::color::LabImage;
use crate::image::ImageF32;

pub fn gradient_map(lab: &LabImage) -> ImageF32 {
    let (w, h) = (lab.w, lab.h);
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }
    for k in 0..3 {
        let plane = lab.plane(k);
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let i = y * w + x;
                let dx = plane[i - 1] - plane[i + 1];
                let dy = plane[i - w] - plane[i + w];
                out.data[i] += dx * dx + dy * dy;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_step_lights_up_next_to_the_edge_only() {
        let (w, h) = (6, 4);
        let mut data = vec![0.0f32; 3 * w * h];
        for y in 0..h {
            for x in 3..w {
                data[y * w + x] = 10.0;
            }
        }
        let lab = LabImage { w, h, data };
        let g = gradient_map(&lab);
        assert_eq!(g.get(1, 1), 0.0);
        assert_eq!(g.get(2, 1), 100.0);
        assert_eq!(g.get(3, 1), 100.0);
        assert_eq!(g.get(4, 1), 0.0);
        // border untouched
        assert_eq!(g.get(3, 0), 0.0);
    }
}
