//! Stock masks for [`mask_filter`](crate::mask_filter).
//!
//! Conventions:
//! - Masks are row-major and applied as correlation (not flipped).
//! - `SOBEL_X` responds positively to intensity increasing with `x`,
//!   `SOBEL_Y` to intensity increasing with `y` (downwards).

use crate::mask::Kernel2D;

pub const IDENTITY1: [f32; 1] = [1.0];

pub const BOX3: [f32; 9] = [1.0 / 9.0; 9];

#[rustfmt::skip]
pub const SOBEL_X: [f32; 9] = [
    -1.0, 0.0, 1.0,
    -2.0, 0.0, 2.0,
    -1.0, 0.0, 1.0,
];

#[rustfmt::skip]
pub const SOBEL_Y: [f32; 9] = [
    -1.0, -2.0, -1.0,
     0.0,  0.0,  0.0,
     1.0,  2.0,  1.0,
];

/// 4-neighbour Laplacian. Its output is signed, which makes it a natural
/// input for [`zero_crossing`](crate::zero_crossing).
#[rustfmt::skip]
pub const LAPLACE4: [f32; 9] = [
    0.0,  1.0, 0.0,
    1.0, -4.0, 1.0,
    0.0,  1.0, 0.0,
];

pub fn box3() -> Kernel2D<'static> {
    Kernel2D::from_static(&BOX3, 3)
}

pub fn sobel_x() -> Kernel2D<'static> {
    Kernel2D::from_static(&SOBEL_X, 3)
}

pub fn sobel_y() -> Kernel2D<'static> {
    Kernel2D::from_static(&SOBEL_Y, 3)
}

pub fn laplace4() -> Kernel2D<'static> {
    Kernel2D::from_static(&LAPLACE4, 3)
}

/// Normalized `side x side` box mask.
///
/// # Panics
/// Panics if `side` is zero or even.
pub fn box_taps(side: usize) -> Vec<f32> {
    assert!(side % 2 == 1, "box side must be odd");
    let n = side * side;
    vec![1.0 / n as f32; n]
}
