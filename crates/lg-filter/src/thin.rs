//! Directional zero-crossing test.
//!
//! The gradient direction at each pixel is quantized into 8 compass sectors
//! of width `PI / 4`. Sector 0 is centered on angle 0 (pointing to `+x`) and
//! sectors advance counter-clockwise in angle, which with `y` pointing down
//! means `(1, 1)` for sector 1. A pixel is an edge when its value and the
//! value of the neighbour in its sector have strictly opposite signs.
//!
//! This is a cheap edge indicator, not Canny non-maximum suppression.

use core::f32::consts::{PI, TAU};

use lg_core::Gray;

pub const EDGE_ON: f32 = 255.0;
pub const EDGE_OFF: f32 = 0.0;

/// Neighbour offset `(dx, dy)` for each direction sector.
pub const SECTOR_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const EIGHTH: f32 = PI / 8.0;

/// Quantizes an angle in radians into one of 8 sectors.
///
/// Negative angles get `2 * PI` added once. Sector 0 covers
/// `[0, PI/8) ∪ [2PI - PI/8, 2PI)`, sector `k` covers
/// `[(2k - 1) PI/8, (2k + 1) PI/8)`.
#[inline]
pub fn direction_sector(theta: f32) -> usize {
    let mut t = theta;
    if t < 0.0 {
        t += TAU;
    }

    if t < EIGHTH || t >= TAU - EIGHTH {
        0
    } else if t < 3.0 * EIGHTH {
        1
    } else if t < 5.0 * EIGHTH {
        2
    } else if t < 7.0 * EIGHTH {
        3
    } else if t < 9.0 * EIGHTH {
        4
    } else if t < 11.0 * EIGHTH {
        5
    } else if t < 13.0 * EIGHTH {
        6
    } else {
        7
    }
}

/// Marks sign changes of `value` along the quantized direction `dir`.
///
/// `out` is reshaped to `value`; every pixel becomes [`EDGE_ON`] or
/// [`EDGE_OFF`]. Pixels on the border ring whose sector neighbour falls off
/// the grid are [`EDGE_OFF`].
///
/// # Panics
/// Panics if `value` and `dir` differ in dimensions.
pub fn zero_crossing(value: &Gray, dir: &Gray, out: &mut Gray) {
    assert!(
        value.same_dims(dir),
        "value and direction grids must match: {}x{} vs {}x{}",
        value.width(),
        value.height(),
        dir.width(),
        dir.height()
    );

    out.match_dims(value);

    let w = value.width();
    let h = value.height();

    for y in 0..h {
        let interior_row = y > 0 && y + 1 < h;
        let vrow = value.row(y);
        let drow = dir.row(y);

        for x in 0..w {
            let p1 = vrow[x];
            let (ox, oy) = SECTOR_OFFSETS[direction_sector(drow[x])];
            let nx = x as isize + ox;
            let ny = y as isize + oy;

            let p2 = if interior_row && x > 0 && x + 1 < w {
                // SAFETY: offsets are within one pixel and `(x, y)` is off the
                // border ring, so `(nx, ny)` is inside the grid.
                unsafe { *value.get_unchecked(nx as usize, ny as usize) }
            } else {
                match value.get_signed(nx, ny) {
                    Some(&v) => v,
                    None => continue,
                }
            };

            if p1 * p2 < 0.0 {
                // SAFETY: `out` matches `value` and `(x, y)` is in range.
                unsafe {
                    *out.get_unchecked_mut(x, y) = EDGE_ON;
                }
            }
        }
    }
}
