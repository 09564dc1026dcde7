/// Four 8-bit channels packed into a `u32`.
///
/// Bit layout: alpha `24..32`, red `16..24`, green `8..16`, blue `0..8`.
/// Destination pixels are written as `[R, G, B, A]`, so alpha, the most
/// significant input byte, lands last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Destination byte order: offset 0 from bits 16..24, 1 from 8..16,
    /// 2 from 0..8, 3 from 24..32.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        let c = self.0;
        [
            ((c >> 16) & 0xFF) as u8,
            ((c >> 8) & 0xFF) as u8,
            (c & 0xFF) as u8,
            ((c >> 24) & 0xFF) as u8,
        ]
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
