//! Dense renumbering of a label map.
use std::collections::HashMap;

/// Rewrite `labels` to `0..k` in order of first appearance and return `k`.
///
/// The mapping depends only on the scan order of the input, so equal inputs
/// always compact to equal outputs, and compacting twice is a no-op.
pub fn compact_labels(labels: &mut [i32]) -> usize {
    let mut mapping: HashMap<i32, i32> = HashMap::new();
    for label in labels.iter_mut() {
        let next = mapping.len() as i32;
        *label = *mapping.entry(*label).or_insert(next);
    }
    mapping.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_order_defines_ids() {
        let mut labels = vec![42, 42, -3, 7, -3, 42, 1000];
        let size = compact_labels(&mut labels);
        assert_eq!(size, 4);
        assert_eq!(labels, vec![0, 0, 1, 2, 1, 0, 3]);
    }

    #[test]
    fn compaction_is_idempotent() {
        let mut labels = vec![9, 3, 3, 9, 5];
        let first = compact_labels(&mut labels);
        let once = labels.clone();
        let second = compact_labels(&mut labels);
        assert_eq!(first, second);
        assert_eq!(labels, once);
    }

    #[test]
    fn empty_map_has_no_segments() {
        assert_eq!(compact_labels(&mut []), 0);
    }
}
