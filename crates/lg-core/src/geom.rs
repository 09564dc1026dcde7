#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2f {
    pub x: f32,
    pub y: f32,
}

impl Point2f {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rounds half away from zero and shifts by `origin`.
    ///
    /// Coordinates beyond `i32` saturate.
    pub fn to_pixel(self, origin: (i32, i32)) -> (i32, i32) {
        (
            origin.0.saturating_add(self.x.round() as i32),
            origin.1.saturating_add(self.y.round() as i32),
        )
    }
}

impl From<(f32, f32)> for Point2f {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Ordered polyline of traced boundary points.
pub type Contour = Vec<Point2f>;

#[cfg(test)]
mod tests {
    use super::Point2f;

    #[test]
    fn to_pixel_rounds_half_away_from_zero() {
        assert_eq!(Point2f::new(0.5, -0.5).to_pixel((0, 0)), (1, -1));
        assert_eq!(Point2f::new(2.49, 3.51).to_pixel((10, -2)), (12, 2));
        assert_eq!(Point2f::from((-1.5, 0.0)).to_pixel((0, 0)), (-2, 0));
    }

    #[test]
    fn to_pixel_saturates() {
        let p = Point2f::new(f32::MAX, f32::MIN);
        assert_eq!(p.to_pixel((5, -5)), (i32::MAX, i32::MIN));
    }
}
