use lg_core::{Error, Point2f};

use crate::color::PackedColor;
use crate::surface::RgbaSurface;

impl RgbaSurface<'_> {
    /// Integer Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints
    /// included. Each stepped pixel is clipped individually; a segment whose
    /// bounding box misses the surface is skipped without stepping.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: PackedColor) {
        let (mut x, mut y) = (x0 as i64, y0 as i64);
        let (x1, y1) = (x1 as i64, y1 as i64);

        let (w, h) = (self.width() as i64, self.height() as i64);
        if x.max(x1) < 0 || y.max(y1) < 0 || x.min(x1) >= w || y.min(y1) >= h {
            return;
        }

        let dx = (x1 - x).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let dy = -(y1 - y).abs();
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Filled 3x3 square centered on `(x, y)`, clipped.
    pub fn draw_marker(&mut self, x: i32, y: i32, color: PackedColor) {
        let (cx, cy) = (x as i64, y as i64);
        for oy in -1..=1 {
            for ox in -1..=1 {
                self.put_pixel(cx + ox, cy + oy, color);
            }
        }
    }
}

/// Draws each contour as a polyline with 3x3 markers on both endpoints.
///
/// Points are rounded to the nearest pixel and shifted by `origin`.
/// Contours with fewer than two points are skipped entirely. Segments are
/// drawn first, then the start and end markers, all in `color`.
pub fn draw_contours<I>(
    surface: &mut RgbaSurface<'_>,
    origin: (i32, i32),
    contours: I,
    color: PackedColor,
) where
    I: IntoIterator,
    I::Item: AsRef<[Point2f]>,
{
    for contour in contours {
        let points = contour.as_ref();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            continue;
        };
        if points.len() < 2 {
            continue;
        }

        for seg in points.windows(2) {
            let (x0, y0) = seg[0].to_pixel(origin);
            let (x1, y1) = seg[1].to_pixel(origin);
            surface.draw_line(x0, y0, x1, y1, color);
        }

        let (bx, by) = first.to_pixel(origin);
        let (ex, ey) = last.to_pixel(origin);
        surface.draw_marker(bx, by, color);
        surface.draw_marker(ex, ey, color);
    }
}

/// Raw-buffer entry point for host callers.
///
/// `stride` is the byte distance between rows. The buffer is validated once
/// up front; a buffer too short for `height` rows is an error rather than
/// an out-of-bounds write.
#[allow(clippy::too_many_arguments)]
pub fn draw_contours_rgba<I>(
    rgba: &mut [u8],
    stride: usize,
    width: usize,
    height: usize,
    origin_x: i32,
    origin_y: i32,
    contours: I,
    color: PackedColor,
) -> Result<(), Error>
where
    I: IntoIterator,
    I::Item: AsRef<[Point2f]>,
{
    let mut surface = RgbaSurface::from_slice_mut(rgba, stride, width, height)?;
    draw_contours(&mut surface, (origin_x, origin_y), contours, color);
    Ok(())
}

#[cfg(test)]
mod tests {
    use lg_core::{Contour, Error, Point2f};

    use crate::color::PackedColor;
    use crate::raster::{draw_contours, draw_contours_rgba};
    use crate::surface::RgbaSurface;

    const RED: PackedColor = PackedColor(0xFFFF_0000);
    const RED_BYTES: [u8; 4] = [0xFF, 0, 0, 0xFF];

    fn lit(buf: &[u8], stride: usize, w: usize, h: usize) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..h {
            for x in 0..w {
                let off = y * stride + x * 4;
                if buf[off..off + 4] != [0, 0, 0, 0] {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn line_pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(usize, usize)> {
        let mut buf = vec![0u8; 16 * 16 * 4];
        let mut s = RgbaSurface::from_slice_mut(&mut buf, 64, 16, 16).expect("valid surface");
        s.draw_line(x0, y0, x1, y1, RED);
        lit(&buf, 64, 16, 16)
    }

    #[test]
    fn bresenham_octants() {
        assert_eq!(line_pixels(0, 0, 3, 0), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(line_pixels(2, 3, 2, 0), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert_eq!(line_pixels(0, 0, 3, 3), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(line_pixels(0, 0, 4, 2), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
        assert_eq!(line_pixels(5, 5, 5, 5), vec![(5, 5)]);
    }

    #[test]
    fn line_is_symmetric_in_pixel_count() {
        let fwd = line_pixels(1, 2, 11, 7);
        let back = line_pixels(11, 7, 1, 2);
        assert_eq!(fwd.len(), back.len());
        assert_eq!(fwd.len(), 11);
    }

    #[test]
    fn empty_contour_set_leaves_buffer_untouched() {
        let mut buf: Vec<u8> = (0..10 * 10 * 4).map(|i| (i % 251) as u8).collect();
        let before = buf.clone();
        let none: Vec<Contour> = Vec::new();
        draw_contours_rgba(&mut buf, 40, 10, 10, 0, 0, &none, RED).expect("valid buffer");
        assert_eq!(buf, before);
    }

    #[test]
    fn short_contours_are_skipped() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        let contours = vec![vec![], vec![Point2f::new(4.0, 4.0)]];
        draw_contours_rgba(&mut buf, 40, 10, 10, 0, 0, &contours, RED).expect("valid buffer");
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn two_point_contour_with_clipped_markers() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        let contours = vec![vec![Point2f::new(0.0, 0.0), Point2f::new(3.0, 0.0)]];
        draw_contours_rgba(&mut buf, 40, 10, 10, 0, 0, &contours, RED).expect("valid buffer");

        let mut expected = vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (1, 1)];
        expected.extend([(2, 1), (3, 1), (4, 1)]);
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(lit(&buf, 40, 10, 10), expected);

        let off = 40 + 4 * 4;
        assert_eq!(&buf[off..off + 4], &RED_BYTES);
    }

    #[test]
    fn origin_and_rounding_are_applied() {
        let mut buf = vec![0u8; 8 * 8 * 4];
        {
            let mut s = RgbaSurface::from_slice_mut(&mut buf, 32, 8, 8).expect("valid surface");
            let contour = [Point2f::new(0.6, 0.4), Point2f::new(0.6, 2.5)];
            draw_contours(&mut s, (3, 2), [&contour[..]], RED);
            // (0.6, 0.4) -> (1, 0) -> (4, 2); (0.6, 2.5) -> (1, 3) -> (4, 5).
            assert_eq!(s.pixel(4, 3), Some(RED_BYTES));
            assert_eq!(s.pixel(5, 6), Some(RED_BYTES));
            assert_eq!(s.pixel(6, 4), Some([0, 0, 0, 0]));
        }
        // Both markers cover x = 3..=5, y = 1..=6 and contain the line.
        assert_eq!(lit(&buf, 32, 8, 8).len(), 18);
    }

    #[test]
    fn fully_outside_contour_writes_nothing() {
        let mut buf = vec![0u8; 4 * 4 * 4];
        let contours = [[Point2f::new(-20.0, -20.0), Point2f::new(-10.0, 30.0)]];
        draw_contours_rgba(&mut buf, 16, 4, 4, 0, 0, &contours, RED).expect("valid buffer");
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn far_off_surface_segments_are_skipped() {
        let mut buf = vec![0u8; 8 * 8 * 4];
        {
            let mut s = RgbaSurface::from_slice_mut(&mut buf, 32, 8, 8).expect("valid surface");
            s.draw_line(i32::MIN, -5, i32::MAX, -5, RED);
            s.draw_line(20, i32::MIN, 20, i32::MAX, RED);
            s.draw_line(i32::MAX, i32::MAX, i32::MAX - 3, i32::MAX, RED);
        }
        assert!(buf.iter().all(|&b| b == 0));

        // Saturated endpoints from a contour far outside the surface.
        let contours = [[Point2f::new(-1.0e12, 100.0), Point2f::new(1.0e12, 100.0)]];
        draw_contours_rgba(&mut buf, 32, 8, 8, 0, 0, &contours, RED).expect("valid buffer");
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn overlapping_bounding_box_still_draws() {
        // Endpoints both off-surface, segment crosses it.
        assert_eq!(line_pixels(-2, 3, 17, 3).len(), 16);
        assert_eq!(line_pixels(5, -1, 5, 0), vec![(5, 0)]);
    }

    #[test]
    fn rejects_short_buffer() {
        let mut buf = vec![0u8; 10];
        let none: [Contour; 0] = [];
        assert_eq!(
            draw_contours_rgba(&mut buf, 8, 2, 2, 0, 0, &none, RED),
            Err(Error::SizeMismatch {
                expected: 16,
                actual: 10
            })
        );
    }
}
