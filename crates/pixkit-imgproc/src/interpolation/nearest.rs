/// Map an output index to the index of its nearest source sample along one axis.
///
/// The source index is `floor(dst_index * scale)`, clamped to `src_len - 1`.
///
/// # Arguments
///
/// * `dst_index` - The index in the output axis.
/// * `scale` - The ratio between the source and the output lengths.
/// * `src_len` - The length of the source axis. Must be positive.
///
/// # Returns
///
/// The index in the source axis.
///
/// # Example
///
/// ```
/// use pixkit_imgproc::interpolation::nearest_source_index;
///
/// // upscale 2 -> 4
/// assert_eq!(nearest_source_index(3, 0.5, 2), 1);
/// // downscale 4 -> 2
/// assert_eq!(nearest_source_index(1, 2.0, 4), 2);
/// ```
pub fn nearest_source_index(dst_index: usize, scale: f64, src_len: usize) -> usize {
    // floor and truncation agree for non-negative values
    let src_index = (dst_index as f64 * scale).floor() as usize;
    src_index.min(src_len.saturating_sub(1))
}

/// Precompute the source index of every output index along one axis.
///
/// # Arguments
///
/// * `dst_len` - The length of the output axis. Must be positive.
/// * `src_len` - The length of the source axis. Must be positive.
///
/// # Returns
///
/// A vector of `dst_len` source indices, each in `0..src_len`.
///
/// # Example
///
/// ```
/// use pixkit_imgproc::interpolation::nearest_index_map;
///
/// assert_eq!(nearest_index_map(4, 2), vec![0, 0, 1, 1]);
/// assert_eq!(nearest_index_map(2, 4), vec![0, 2]);
/// ```
pub fn nearest_index_map(dst_len: usize, src_len: usize) -> Vec<usize> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|i| nearest_source_index(i, scale, src_len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{nearest_index_map, nearest_source_index};

    #[test]
    fn index_map_identity() {
        assert_eq!(nearest_index_map(5, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn index_map_fractional_scale() {
        // scale = 3 / 5 = 0.6
        assert_eq!(nearest_index_map(5, 3), vec![0, 0, 1, 1, 2]);
        // scale = 5 / 3
        assert_eq!(nearest_index_map(3, 5), vec![0, 1, 3]);
    }

    #[test]
    fn index_map_single_source() {
        assert!(nearest_index_map(7, 1).iter().all(|&i| i == 0));
    }

    #[test]
    fn index_map_stays_in_range() {
        for src_len in 1..64 {
            for dst_len in 1..64 {
                let map = nearest_index_map(dst_len, src_len);
                assert_eq!(map.len(), dst_len);
                assert!(map.iter().all(|&i| i < src_len));
                assert!(map.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }

    #[test]
    fn source_index_is_clamped() {
        assert_eq!(nearest_source_index(10, 1.0, 4), 3);
    }
}
