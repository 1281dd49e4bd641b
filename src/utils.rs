//! Helper functions for sizing and weighting the selection forest

/// Number of distinct index values per history position
pub const BRANCHING_FACTOR: usize = 3;

/// Number of leaves a single mode has at `depth`
pub fn leaves_at_depth(depth: usize) -> usize {
    BRANCHING_FACTOR.pow(depth as u32)
}

/// Per-category weight for a leaf at `depth` in a forest `max_depth` deep
///
/// The weight shrinks by the branching factor with every extra level, so
/// weight times the number of leaves stays constant across depths and each
/// depth starts out equally likely. Returns `None` on overflow or when
/// `depth > max_depth`.
pub fn leaf_weight(base_weight: u32, max_depth: usize, depth: usize) -> Option<u32> {
    let levels = max_depth.checked_sub(depth)?;
    let scale = (BRANCHING_FACTOR as u32).checked_pow(levels as u32)?;
    base_weight.checked_mul(scale)
}

/// Expands a flat leaf number into its history index tuple
///
/// The first element is the index of the most recent round.
pub fn decode_path(mut number: usize, depth: usize) -> Vec<u8> {
    let mut path = vec![0u8; depth];
    for slot in path.iter_mut().rev() {
        *slot = (number % BRANCHING_FACTOR) as u8;
        number /= BRANCHING_FACTOR;
    }
    path
}
