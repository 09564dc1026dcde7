use lg_core::Point2f;
use lg_draw::{PackedColor, draw_contours_rgba};
use tracing::{trace, warn};

use crate::error::HostError;

/// Draws contours onto a host RGBA framebuffer.
///
/// Host dimensions and stride arrive as `i32`; they are validated here and
/// the actual drawing is delegated to [`draw_contours_rgba`].
#[allow(clippy::too_many_arguments)]
pub fn overlay_contours<I>(
    rgba: &mut [u8],
    stride: i32,
    width: i32,
    height: i32,
    origin_x: i32,
    origin_y: i32,
    contours: I,
    color: u32,
) -> Result<(), HostError>
where
    I: IntoIterator,
    I::Item: AsRef<[Point2f]>,
{
    if width < 0 || height < 0 {
        warn!(width, height, "rejecting overlay with negative dimensions");
        return Err(HostError::InvalidDimensions { width, height });
    }
    if stride < 0 {
        return Err(HostError::InvalidStride { stride, width });
    }

    trace!(width, height, stride, origin_x, origin_y, "drawing overlay");
    draw_contours_rgba(
        rgba,
        stride as usize,
        width as usize,
        height as usize,
        origin_x,
        origin_y,
        contours,
        PackedColor(color),
    )
    .inspect_err(|err| warn!(%err, "rejecting overlay framebuffer"))?;
    Ok(())
}
