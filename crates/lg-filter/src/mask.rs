use lg_core::{Error, Gray, SampleGrid, reflect_single};

/// Square convolution mask borrowed for one filter call.
///
/// Taps are row-major, `side * side` of them, and `side` is odd so the mask
/// has a center tap. Validation happens once here instead of per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel2D<'a> {
    taps: &'a [f32],
    side: usize,
}

impl<'a> Kernel2D<'a> {
    pub fn new(taps: &'a [f32], side: usize) -> Result<Self, Error> {
        if side == 0 || side % 2 == 0 || side.checked_mul(side) != Some(taps.len()) {
            return Err(Error::InvalidKernel {
                side,
                len: taps.len(),
            });
        }
        Ok(Self { taps, side })
    }

    /// Infers the side length from `taps.len()`.
    pub fn square(taps: &'a [f32]) -> Result<Self, Error> {
        Self::new(taps, taps.len().isqrt())
    }

    pub(crate) const fn from_static(taps: &'a [f32], side: usize) -> Self {
        Self { taps, side }
    }

    pub fn taps(&self) -> &'a [f32] {
        self.taps
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// `floor((side - 1) / 2)`.
    pub fn radius(&self) -> usize {
        (self.side - 1) / 2
    }
}

/// Correlates `input` with `kernel` at every pixel, borders included.
///
/// Taps falling outside the grid use single reflection
/// ([`reflect_single`]), so a 3x3 mask at `x = w - 1` reads column `w - 1`
/// again, while at `x = 0` it reads column `1`. Taps are accumulated in
/// row-major mask order.
pub fn mask_filter<T: Copy + Into<f32>>(
    input: &SampleGrid<T>,
    out: &mut Gray,
    kernel: &Kernel2D<'_>,
) {
    out.match_dims(input);

    let w = input.width();
    let h = input.height();
    if w == 0 || h == 0 {
        return;
    }

    let r = kernel.radius();
    let taps = kernel.taps();
    let inner_x = r..w.saturating_sub(r);
    let inner_y = r..h.saturating_sub(r);

    for y in 0..h {
        for x in 0..w {
            let acc = if inner_x.contains(&x) && inner_y.contains(&y) {
                correlate_inner(input, taps, r, x, y)
            } else {
                correlate_reflected(input, taps, r, x, y)
            };
            // SAFETY: `x < w`, `y < h` and `out` matches `input`.
            unsafe {
                *out.get_unchecked_mut(x, y) = acc;
            }
        }
    }
}

#[inline]
fn correlate_inner<T: Copy + Into<f32>>(
    input: &SampleGrid<T>,
    taps: &[f32],
    r: usize,
    x: usize,
    y: usize,
) -> f32 {
    let side = 2 * r + 1;
    let mut acc = 0.0f32;
    for (ky, mask_row) in taps.chunks_exact(side).enumerate() {
        let row = input.row(y + ky - r);
        let src = &row[x - r..x - r + side];
        for (&m, &s) in mask_row.iter().zip(src) {
            acc += s.into() * m;
        }
    }
    acc
}

fn correlate_reflected<T: Copy + Into<f32>>(
    input: &SampleGrid<T>,
    taps: &[f32],
    r: usize,
    x: usize,
    y: usize,
) -> f32 {
    let w = input.width();
    let h = input.height();
    let r = r as isize;

    let mut acc = 0.0f32;
    let mut n = 0;
    for ky in -r..=r {
        let sy = reflect_single(y as isize + ky, h);
        for kx in -r..=r {
            let sx = reflect_single(x as isize + kx, w);
            // SAFETY: `reflect_single` returns indices in `[0, len)`.
            let s = unsafe { *input.get_unchecked(sx, sy) };
            acc += s.into() * taps[n];
            n += 1;
        }
    }
    acc
}
