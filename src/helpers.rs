/// Moves `index` by `step` within `0..len`, wrapping in both directions.
///
/// Equivalent to `(index + step + len) % len` for single steps, but stays in
/// range for steps of any size or sign. `len` must be non-zero.
pub fn wrap_index(index: usize, step: i32, len: usize) -> usize {
    debug_assert!(len > 0);
    let len = len as i64;
    (index as i64 + step as i64).rem_euclid(len) as usize
}

/// `Math.sign` for wheel deltas: -1, 0 or 1.
pub fn sign(value: f32) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
