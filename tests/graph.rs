mod common;

use common::synthetic_image::{two_halves_rgba, uniform_rgba, BLUE, RED};
use common::{assert_dense_labels, init_logging};
use segmenter::image::ImageRgba;
use segmenter::{segment_graph_based, GraphOptions, GraphSegmenter, SegmentError};

#[test]
fn uniform_2x2_is_a_single_segment() {
    init_logging();
    let buffer = uniform_rgba(2, 2, [90, 120, 30]);
    let image = ImageRgba::new(2, 2, &buffer).unwrap();
    let result = segment_graph_based(image, &GraphOptions::default()).unwrap();
    assert_eq!(result.size, 1);
    assert_eq!(result.index_map, vec![0, 0, 0, 0]);
    assert_eq!((result.width, result.height), (2, 2));
}

#[test]
fn two_solid_halves_give_two_segments() {
    init_logging();
    let (w, h) = (100usize, 100usize);
    let buffer = two_halves_rgba(w, h, RED, BLUE);
    let image = ImageRgba::new(w, h, &buffer).unwrap();
    // No pre-smoothing so the colour edge stays one pixel wide.
    let options = GraphOptions {
        sigma: 0.0,
        threshold: 10.0,
        min_size: 1,
    };
    let result = segment_graph_based(image, &options).unwrap();
    assert_eq!(result.size, 2);
    let left = result.index_map[0];
    let right = result.index_map[w - 1];
    assert_ne!(left, right);
    for y in 0..h {
        for x in 0..w {
            let expected = if x < w / 2 { left } else { right };
            assert_eq!(result.index_map[y * w + x], expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn larger_threshold_never_adds_segments() {
    init_logging();
    let (w, h) = (100usize, 100usize);
    let buffer = two_halves_rgba(w, h, RED, BLUE);
    let image = ImageRgba::new(w, h, &buffer).unwrap();
    let mut previous = usize::MAX;
    for c in [10.0, 500.0, 1.0e6, 1.0e7] {
        let options = GraphOptions {
            sigma: 0.5,
            threshold: c,
            min_size: 1,
        };
        let result = segment_graph_based(image, &options).unwrap();
        assert_dense_labels(&result.index_map, result.size);
        assert!(
            result.size <= previous,
            "c={c} gave {} segments, previous {previous}",
            result.size
        );
        previous = result.size;
    }
    assert_eq!(previous, 1);
}

#[test]
fn caller_buffer_is_not_modified() {
    init_logging();
    let (w, h) = (40usize, 30usize);
    let buffer = two_halves_rgba(w, h, RED, BLUE);
    let before = buffer.clone();
    let image = ImageRgba::new(w, h, &buffer).unwrap();
    let options = GraphOptions {
        sigma: 2.0,
        ..Default::default()
    };
    segment_graph_based(image, &options).unwrap();
    assert_eq!(buffer, before);
}

#[test]
fn padded_rows_are_respected() {
    init_logging();
    let (w, h, stride) = (6usize, 4usize, 6 * 4 + 8);
    let mut buffer = vec![0u8; stride * h];
    for y in 0..h {
        for x in 0..w {
            let c = if x < 3 { RED } else { BLUE };
            let i = y * stride + x * 4;
            buffer[i..i + 4].copy_from_slice(&[c[0], c[1], c[2], 255]);
        }
        // Garbage in the padding must not leak into the graph.
        for b in &mut buffer[y * stride + w * 4..(y + 1) * stride] {
            *b = 77;
        }
    }
    let image = ImageRgba {
        w,
        h,
        stride,
        data: &buffer,
    };
    let options = GraphOptions {
        sigma: 0.0,
        threshold: 10.0,
        min_size: 1,
    };
    let (result, report) = GraphSegmenter::new(options)
        .process_with_report(image)
        .unwrap();
    assert_eq!(result.size, 2);
    assert_eq!(result.index_map.len(), w * h);
    assert_eq!(report.size, 2);
    assert!(report.timing.total_ms >= 0.0);
}

#[test]
fn huge_sigma_is_an_error_not_a_panic() {
    let buffer = uniform_rgba(4, 4, RED);
    let image = ImageRgba::new(4, 4, &buffer).unwrap();
    let options = GraphOptions {
        sigma: 1.0e30,
        ..Default::default()
    };
    assert_eq!(
        segment_graph_based(image, &options).unwrap_err(),
        SegmentError::InvalidSigma(1.0e30)
    );
}
