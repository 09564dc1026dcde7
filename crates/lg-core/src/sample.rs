use crate::border::reflect_mirror;
use crate::grid::SampleGrid;

const CUBIC_TAPS: [isize; 4] = [-1, 0, 1, 2];

/// Cubic convolution weight for a tap at distance `d`.
///
/// `1 - 2d^2 + d^3` on `[0, 1]`, `4 - 8d + 5d^2 - d^3` on `(1, 2]`, zero
/// beyond. `w(0) = 1` and `w(1) = w(2) = 0`, so integer positions reproduce
/// the sample exactly.
#[inline]
pub fn cubic_weight(d: f32) -> f32 {
    let d = d.abs();
    let d2 = d * d;
    let d3 = d2 * d;
    if d <= 1.0 {
        1.0 - 2.0 * d2 + d3
    } else if d <= 2.0 {
        4.0 - 8.0 * d + 5.0 * d2 - d3
    } else {
        0.0
    }
}

/// Samples `grid` at a continuous position with the 4x4 cubic kernel.
///
/// Taps sit at offsets `-1..=2` from `floor(x), floor(y)`; tap coordinates
/// outside the grid are folded back with [`reflect_mirror`]. Weights depend
/// only on the fractional part, so coordinates far from the grid still sum
/// to one. Non-finite coordinates sample their saturated integer position.
///
/// # Panics
/// Panics on an empty grid.
pub fn sample_cubic_f32<T: Copy + Into<f32>>(grid: &SampleGrid<T>, x: f32, y: f32) -> f32 {
    let w = grid.width();
    let h = grid.height();
    assert!(w > 0 && h > 0, "cannot sample an empty grid");

    let (x0, fx) = split_coord(x);
    let (y0, fy) = split_coord(y);

    let mut wx = [0.0f32; 4];
    let mut ix = [0usize; 4];
    for (k, &off) in CUBIC_TAPS.iter().enumerate() {
        wx[k] = cubic_weight(off as f32 - fx);
        ix[k] = reflect_mirror(x0.saturating_add(off), w);
    }

    let mut acc = 0.0f32;
    for &offy in &CUBIC_TAPS {
        let wy = cubic_weight(offy as f32 - fy);
        if wy == 0.0 {
            continue;
        }
        let iy = reflect_mirror(y0.saturating_add(offy), h);
        let row = grid.row(iy);
        for k in 0..4 {
            if wx[k] != 0.0 {
                acc += row[ix[k]].into() * (wx[k] * wy);
            }
        }
    }
    acc
}

// Integer base and fractional offset in `[0, 1)`.
#[inline]
fn split_coord(v: f32) -> (isize, f32) {
    let base = v.floor();
    let frac = v - base;
    let frac = if frac.is_finite() { frac } else { 0.0 };
    (base as isize, frac)
}

impl<T: Copy + Into<f32>> SampleGrid<T> {
    /// See [`sample_cubic_f32`].
    pub fn cubic_at(&self, x: f32, y: f32) -> f32 {
        sample_cubic_f32(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Gray, SampleGrid};
    use crate::sample::{cubic_weight, sample_cubic_f32};

    fn ramp(w: usize, h: usize) -> Gray {
        let data = (0..w * h).map(|i| ((i * 37) % 101) as f32).collect();
        Gray::from_vec(w, h, data).expect("valid grid")
    }

    #[test]
    fn weight_knots() {
        assert_eq!(cubic_weight(0.0), 1.0);
        assert_eq!(cubic_weight(1.0), 0.0);
        assert_eq!(cubic_weight(2.0), 0.0);
        assert_eq!(cubic_weight(2.5), 0.0);
        assert!((cubic_weight(0.5) - 0.625).abs() < 1e-7);
        assert!((cubic_weight(-1.5) + 0.125).abs() < 1e-7);
    }

    #[test]
    fn integer_positions_are_exact() {
        let g = ramp(7, 6);
        for y in 1..5 {
            for x in 1..5 {
                let v = g.cubic_at(x as f32, y as f32);
                assert_eq!(v, *g.get(x, y).expect("in bounds"), "({x}, {y})");
            }
        }
    }

    #[test]
    fn constant_grid_is_preserved_between_samples() {
        let g = Gray::from_vec(5, 5, vec![3.0; 25]).expect("valid grid");
        for &(x, y) in &[(0.5, 0.5), (2.25, 3.75), (4.9, 0.1), (-0.4, 4.6)] {
            let v = g.cubic_at(x, y);
            assert!((v - 3.0).abs() < 1e-5, "({x}, {y}) -> {v}");
        }
    }

    #[test]
    fn linear_ramp_is_reproduced_inside() {
        let data = (0..36).map(|i| (i % 6) as f32 * 2.0).collect();
        let g = Gray::from_vec(6, 6, data).expect("valid grid");
        let v = g.cubic_at(2.5, 2.0);
        assert!((v - 5.0).abs() < 1e-5);
    }

    #[test]
    fn mirror_border_is_used_near_edges() {
        // Row [10, 20, 30]: taps -2 and -1 fold to 2 and 1.
        let g = SampleGrid::from_vec(3, 1, vec![10u8, 20, 30]).expect("valid grid");
        let left = sample_cubic_f32(&g, -0.5, 0.0);
        let expected = 30.0 * -0.125 + 20.0 * 0.625 + 10.0 * 0.625 + 20.0 * -0.125;
        assert!((left - expected).abs() < 1e-4, "{left} vs {expected}");

        assert_eq!(g.cubic_at(2.0, 0.0), 30.0);
    }

    #[test]
    fn far_coordinates_stay_normalized() {
        let g = Gray::from_vec(4, 4, vec![1.0; 16]).expect("valid grid");
        for &(x, y) in &[
            (4.0e9, 1.0),
            (-4.0e9, 2.5),
            (1.5, 3.0e12),
            (f32::MAX, 1.0),
            (f32::MIN, f32::MAX),
            (f32::INFINITY, 0.5),
        ] {
            let v = g.cubic_at(x, y);
            assert!((v - 1.0).abs() < 1e-5, "({x}, {y}) -> {v}");
        }
    }

    #[test]
    fn far_integer_coordinate_lands_on_mirrored_sample() {
        let g = ramp(5, 3);
        // 4e9 folds to column 4 with period 9.
        let v = g.cubic_at(4.0e9, 1.0);
        assert_eq!(v, *g.get(4, 1).expect("in bounds"));
    }
}
