//! Label-map post-processing shared by both segmentation paths.
//!
//! - `eliminate_small_regions`: fold 4-connected components below a minimum
//!   pixel count into a neighbour.
//! - `compact_labels`: renumber to a dense `0..size` range.
//! - `packing`: the RGB byte layout used when label maps are persisted.
mod compact;
pub mod packing;
mod regions;

pub use compact::compact_labels;
pub use packing::{decode_label, decode_label_map, encode_label, encode_label_map};
pub use regions::{eliminate_small_regions, EliminationStats};
