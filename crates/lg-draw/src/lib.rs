//! Contour overlay rasterizer.
//!
//! Draws already-traced polylines onto an externally owned 4-byte-per-pixel
//! framebuffer. Points are rounded to the nearest pixel, segments use integer
//! Bresenham stepping and every pixel write is clipped to the surface, so
//! contours partially or fully off-screen are safe to draw.
//!
//! Colors are [`PackedColor`] values; see its docs for the byte order written
//! to the destination.

mod color;
mod raster;
mod surface;

pub use color::PackedColor;
pub use raster::{draw_contours, draw_contours_rgba};
pub use surface::{BYTES_PER_PIXEL, RgbaSurface};
