mod common;

use common::synthetic_image::blocks_with_noise_rgba;
use common::{assert_dense_labels, init_logging, label_sizes};
use segmenter::image::ImageRgba;
use segmenter::labels::compact_labels;
use segmenter::{
    segment_graph_based, segment_superpixel, GraphOptions, SegmentationResult, SuperpixelOptions,
};

const W: usize = 96;
const H: usize = 72;

fn graph_result(seed: u32, options: &GraphOptions) -> SegmentationResult {
    let buffer = blocks_with_noise_rgba(W, H, seed);
    let image = ImageRgba::new(W, H, &buffer).unwrap();
    segment_graph_based(image, options).unwrap()
}

fn superpixel_result(seed: u32, options: &SuperpixelOptions) -> SegmentationResult {
    let buffer = blocks_with_noise_rgba(W, H, seed);
    let image = ImageRgba::new(W, H, &buffer).unwrap();
    segment_superpixel(image, options).unwrap()
}

fn assert_min_size(result: &SegmentationResult, min_size: usize) {
    if W * H < min_size {
        assert_eq!(result.size, 1);
        return;
    }
    for (label, &count) in label_sizes(&result.index_map, result.size).iter().enumerate() {
        assert!(
            count >= min_size,
            "segment {label} has {count} pixels, minimum {min_size}"
        );
    }
}

#[test]
fn graph_labels_are_dense_and_large_enough() {
    init_logging();
    for seed in [1, 7, 42] {
        let options = GraphOptions::default();
        let result = graph_result(seed, &options);
        assert_eq!(result.index_map.len(), W * H);
        assert_dense_labels(&result.index_map, result.size);
        assert_min_size(&result, options.min_size);
    }
}

#[test]
fn superpixel_labels_are_dense_and_large_enough() {
    init_logging();
    for seed in [1, 7, 42] {
        let options = SuperpixelOptions::default().with_region_size(16);
        let result = superpixel_result(seed, &options);
        assert_eq!(result.index_map.len(), W * H);
        assert_dense_labels(&result.index_map, result.size);
        assert_min_size(&result, options.resolved_min_region_size());
    }
}

#[test]
fn explicit_minimum_overrides_the_quarter_cell_default() {
    init_logging();
    let options = SuperpixelOptions::default()
        .with_region_size(12)
        .with_min_region_size(100);
    let result = superpixel_result(3, &options);
    assert_dense_labels(&result.index_map, result.size);
    assert_min_size(&result, 100);
}

#[test]
fn minimum_larger_than_image_collapses_to_one_segment() {
    init_logging();
    let options = GraphOptions {
        min_size: W * H + 1,
        ..Default::default()
    };
    let result = graph_result(5, &options);
    assert_eq!(result.size, 1);
    assert!(result.index_map.iter().all(|&l| l == 0));
}

#[test]
fn both_algorithms_are_deterministic() {
    init_logging();
    let g = GraphOptions::default();
    assert_eq!(graph_result(11, &g), graph_result(11, &g));
    let s = SuperpixelOptions::default().with_region_size(20);
    assert_eq!(superpixel_result(11, &s), superpixel_result(11, &s));
}

#[test]
fn compaction_is_idempotent_on_results() {
    init_logging();
    let result = graph_result(9, &GraphOptions::default());
    let mut labels = result.index_map.clone();
    let size = compact_labels(&mut labels);
    assert_eq!(size, result.size);
    assert_eq!(labels, result.index_map);
}
