//! Foundational sample grids for the lumagrid filters.
//!
//! ## Grids and Pitch
//! [`SampleGrid`] owns a row-major buffer. `pitch` is the distance, in
//! elements, between adjacent row starts and is never smaller than `width`.
//! Host buffers with padded rows are read through [`GridView`].
//!
//! ## Raw Access
//! Filters use [`SampleGrid::get_unchecked`] on their hot paths. It is an
//! `unsafe fn` with a debug assertion; [`SampleGrid::get`] is the checked
//! sibling used by tests and at grid borders.
//!
//! ## Boundary Policies
//! Three policies are kept apart on purpose since results depend on them:
//! zero border ring, single reflection ([`reflect_single`]) and full mirror
//! ([`reflect_mirror`]).
//!
//! ## Sampling Coordinates
//! Integer coordinates are sample centers. [`SampleGrid::cubic_at`] uses the
//! floor-based 4x4 cubic convolution neighbourhood.

mod border;
mod error;
mod geom;
mod grid;
mod sample;

pub use border::{reflect_mirror, reflect_single};
pub use error::Error;
pub use geom::{Contour, Point2f};
pub use grid::{Gray, GridView, SampleGrid, to_f32};
pub use sample::{cubic_weight, sample_cubic_f32};
