use lg_core::{Gray, SampleGrid};

/// Unweighted 3x3 mean over the grid interior.
///
/// `out` is reshaped to `input` and zero-filled. Only pixels with
/// `1 <= x <= w - 2` and `1 <= y <= h - 2` are written; the one-pixel border
/// ring keeps its zero fill (the zero-border policy). Grids narrower or
/// shorter than 3 yield an all-zero output.
pub fn mean3<T: Copy + Into<f32>>(input: &SampleGrid<T>, out: &mut Gray) {
    out.match_dims(input);

    let w = input.width();
    let h = input.height();
    if w < 3 || h < 3 {
        return;
    }

    for y in 1..(h - 1) {
        for x in 1..(w - 1) {
            let mut sum = 0.0f32;
            for ny in (y - 1)..=(y + 1) {
                for nx in (x - 1)..=(x + 1) {
                    // SAFETY: `1 <= x <= w - 2` and `1 <= y <= h - 2` keep the
                    // 3x3 footprint inside the grid.
                    sum += unsafe { (*input.get_unchecked(nx, ny)).into() };
                }
            }
            // SAFETY: `(x, y)` is an interior pixel and `out` matches `input`.
            unsafe {
                *out.get_unchecked_mut(x, y) = sum / 9.0;
            }
        }
    }
}
