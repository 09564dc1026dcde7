use core::f32::consts::PI;

use lg_core::Gray;

/// Polar form of a gradient field.
///
/// `amp = sqrt(dx^2 + dy^2)` and `dir = atan2(dy, dx)` in radians, in
/// `(-PI, PI]`. Both outputs are reshaped to the inputs and fully rewritten.
///
/// # Panics
/// Panics if `dx` and `dy` differ in dimensions.
pub fn edge_amp_dir(dx: &Gray, dy: &Gray, amp: &mut Gray, dir: &mut Gray) {
    assert!(
        dx.same_dims(dy),
        "gradient components must match: {}x{} vs {}x{}",
        dx.width(),
        dx.height(),
        dy.width(),
        dy.height()
    );

    amp.match_dims(dx);
    dir.match_dims(dx);

    for y in 0..dx.height() {
        let gx = dx.row(y);
        let gy = dy.row(y);
        let out_amp = amp.row_mut(y);
        for (a, (&px, &py)) in out_amp.iter_mut().zip(gx.iter().zip(gy)) {
            *a = (px * px + py * py).sqrt();
        }

        let out_dir = dir.row_mut(y);
        for (d, (&px, &py)) in out_dir.iter_mut().zip(gx.iter().zip(gy)) {
            *d = angle(px, py);
        }
    }
}

#[inline]
fn angle(px: f32, py: f32) -> f32 {
    let a = py.atan2(px);
    // atan2(-0.0, negative) is -PI; keep the half-open range.
    if a == -PI { PI } else { a }
}
