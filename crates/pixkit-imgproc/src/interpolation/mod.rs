//! Coordinate mapping used when resampling images.
//!
//! Only nearest neighbor sampling is provided: each output pixel takes the
//! value of a single input pixel, with no blending.

mod nearest;

pub use nearest::{nearest_index_map, nearest_source_index};
