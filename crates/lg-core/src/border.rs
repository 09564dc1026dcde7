//! Out-of-range index handling used by the grid filters.
//!
//! The three policies are numerically different and each filter is bound to
//! exactly one of them:
//! - zero border: the one-pixel ring is not computed and keeps its zero fill
//!   (`mean3`),
//! - single reflection, [`reflect_single`] (`mask_filter`),
//! - full mirror, [`reflect_mirror`] (`cubic_at`).

/// Single reflection: `i < 0 -> -i`, then `i >= len -> len - 1 - (i - len)`.
///
/// Each rule fires at most once. Coordinates that a single fold cannot bring
/// back into range (kernel radius larger than the axis) are clamped.
///
/// # Panics
/// Panics if `len == 0`.
#[inline]
pub fn reflect_single(i: isize, len: usize) -> usize {
    assert!(len > 0, "cannot reflect into an empty axis");
    let n = len as isize;

    let mut r = i;
    if r < 0 {
        r = -r;
    }
    if r >= n {
        r = n - 1 - (r - n);
    }
    r.clamp(0, n - 1) as usize
}

/// Full mirror: `i < 0 -> -i`, `i >= len -> 2 * len - i - 1`, folded until
/// the coordinate lands inside the axis.
///
/// The repeated fold is periodic with period `2 * len - 1`, so it is computed
/// in constant time for any `i`.
///
/// # Panics
/// Panics if `len == 0`.
#[inline]
pub fn reflect_mirror(i: isize, len: usize) -> usize {
    assert!(len > 0, "cannot reflect into an empty axis");
    let period = (2 * len - 1) as isize;

    let r = i.rem_euclid(period) as usize;
    if r < len { r } else { 2 * len - 1 - r }
}
