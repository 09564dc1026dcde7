use lg_core::Error;

use crate::color::PackedColor;

pub const BYTES_PER_PIXEL: usize = 4;

/// Mutable view over an externally owned 4-byte-per-pixel framebuffer.
///
/// `stride` is in bytes and may exceed `4 * width`. The last row only needs
/// `4 * width` bytes.
#[derive(Debug)]
pub struct RgbaSurface<'a> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a mut [u8],
}

impl<'a> RgbaSurface<'a> {
    pub fn from_slice_mut(
        data: &'a mut [u8],
        stride: usize,
        width: usize,
        height: usize,
    ) -> Result<Self, Error> {
        let row_bytes = width
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(Error::InvalidStride)?;
        if stride < row_bytes {
            return Err(Error::InvalidStride);
        }

        let min_len = if width == 0 || height == 0 {
            0
        } else {
            (height - 1)
                .checked_mul(stride)
                .and_then(|v| v.checked_add(row_bytes))
                .ok_or(Error::SizeMismatch {
                    expected: usize::MAX,
                    actual: data.len(),
                })?
        };

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Whether `(x, y)` lies inside `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = y * self.stride + x * BYTES_PER_PIXEL;
        let px = self.data.get(off..off + BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Writes one pixel; coordinates outside the surface are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i64, y: i64, color: PackedColor) {
        if !self.contains(x, y) {
            return;
        }
        let off = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
        self.data[off..off + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
    }
}

#[cfg(test)]
mod tests {
    use lg_core::Error;

    use crate::color::PackedColor;
    use crate::surface::RgbaSurface;

    #[test]
    fn validates_stride_and_length() {
        let mut buf = vec![0u8; 2 * 12 + 8];
        assert!(RgbaSurface::from_slice_mut(&mut buf, 12, 2, 3).is_ok());
        assert_eq!(
            RgbaSurface::from_slice_mut(&mut buf, 7, 2, 3).err(),
            Some(Error::InvalidStride)
        );
        assert_eq!(
            RgbaSurface::from_slice_mut(&mut buf, 12, 2, 4).err(),
            Some(Error::SizeMismatch {
                expected: 44,
                actual: 32
            })
        );
        assert!(RgbaSurface::from_slice_mut(&mut [], 0, 0, 5).is_ok());
    }

    #[test]
    fn put_pixel_respects_stride_and_clips() {
        let mut buf = vec![0u8; 2 * 12];
        {
            let mut s = RgbaSurface::from_slice_mut(&mut buf, 12, 2, 2).expect("valid surface");
            s.put_pixel(1, 1, PackedColor(0x4433_2211));
            s.put_pixel(-1, 0, PackedColor(0xFFFF_FFFF));
            s.put_pixel(2, 0, PackedColor(0xFFFF_FFFF));
            s.put_pixel(0, 2, PackedColor(0xFFFF_FFFF));
            assert_eq!(s.pixel(1, 1), Some([0x33, 0x22, 0x11, 0x44]));
            assert_eq!(s.pixel(2, 1), None);
        }

        let mut expected = vec![0u8; 24];
        expected[16..20].copy_from_slice(&[0x33, 0x22, 0x11, 0x44]);
        assert_eq!(buf, expected);
    }
}
