use lg_core::{Gray, GridView, to_f32};
use tracing::warn;

use crate::error::HostError;

/// Host-owned 8-bit luminance plane, borrowed for one processing call.
///
/// This is the Y plane of a camera frame as handed over by the host runtime:
/// signed dimensions, a row stride that may include padding, and a byte
/// buffer whose last row may omit that padding.
#[derive(Debug, Clone, Copy)]
pub struct LumaFrame<'a> {
    view: GridView<'a, u8>,
}

impl<'a> LumaFrame<'a> {
    pub fn from_host(
        data: &'a [u8],
        row_stride: i32,
        width: i32,
        height: i32,
    ) -> Result<Self, HostError> {
        if width <= 0 || height <= 0 {
            warn!(width, height, "rejecting frame with non-positive dimensions");
            return Err(HostError::InvalidDimensions { width, height });
        }
        if row_stride < width {
            warn!(row_stride, width, "rejecting frame with short row stride");
            return Err(HostError::InvalidStride {
                stride: row_stride,
                width,
            });
        }

        let view = GridView::from_slice(
            width as usize,
            height as usize,
            row_stride as usize,
            data,
        )
        .inspect_err(|err| warn!(%err, "rejecting frame buffer"))?;

        Ok(Self { view })
    }

    pub fn width(&self) -> usize {
        self.view.width()
    }

    pub fn height(&self) -> usize {
        self.view.height()
    }

    pub fn view(&self) -> GridView<'a, u8> {
        self.view
    }

    /// Fresh float grid holding the frame samples.
    pub fn to_gray(&self) -> Gray {
        to_f32(&self.view)
    }

    /// Copies the samples into a reusable grid, reshaping it as needed.
    pub fn copy_into(&self, grid: &mut Gray) -> Result<(), HostError> {
        grid.resize(self.width(), self.height())?;
        for y in 0..self.height() {
            for (d, &s) in grid.row_mut(y).iter_mut().zip(self.view.row(y)) {
                *d = s as f32;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lg_core::{Error, Gray};

    use crate::error::HostError;
    use crate::frame::LumaFrame;

    #[test]
    fn rejects_non_positive_dimensions() {
        let data = [0u8; 16];
        assert_eq!(
            LumaFrame::from_host(&data, 4, 0, 4).err(),
            Some(HostError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(LumaFrame::from_host(&data, 4, 4, -1).is_err());
    }

    #[test]
    fn rejects_short_stride_and_buffer() {
        let data = [0u8; 10];
        assert_eq!(
            LumaFrame::from_host(&data, 2, 3, 2).err(),
            Some(HostError::InvalidStride {
                stride: 2,
                width: 3
            })
        );
        assert_eq!(
            LumaFrame::from_host(&data, 8, 4, 2).err(),
            Some(HostError::Grid(Error::SizeMismatch {
                expected: 12,
                actual: 10
            }))
        );
    }

    #[test]
    fn padded_rows_are_dropped_on_copy() {
        // 3x2 frame, stride 5, last row without padding.
        let data = [1u8, 2, 3, 0, 0, 4, 5, 6];
        let frame = LumaFrame::from_host(&data, 5, 3, 2).expect("valid frame");

        let mut grid = Gray::new();
        frame.copy_into(&mut grid).expect("non-empty frame");
        assert_eq!(grid.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(frame.to_gray(), grid);
    }
}
