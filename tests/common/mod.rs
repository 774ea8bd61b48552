#![allow(dead_code)]

pub mod synthetic_image;

use std::sync::Once;

static INIT: Once = Once::new();

/// Route `log` output through the test harness; safe to call from every test.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Labels cover exactly `0..size`, each at least once.
pub fn assert_dense_labels(index_map: &[i32], size: usize) {
    let mut seen = vec![false; size];
    for &label in index_map {
        assert!(
            label >= 0 && (label as usize) < size,
            "label {label} outside 0..{size}"
        );
        seen[label as usize] = true;
    }
    let missing: Vec<usize> = (0..size).filter(|&l| !seen[l]).collect();
    assert!(missing.is_empty(), "labels never used: {missing:?}");
}

/// Pixel count per dense label.
pub fn label_sizes(index_map: &[i32], size: usize) -> Vec<usize> {
    let mut sizes = vec![0usize; size];
    for &label in index_map {
        sizes[label as usize] += 1;
    }
    sizes
}
