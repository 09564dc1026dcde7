//! Umbrella crate for the `lumagrid` workspace.
//!
//! Re-exports the grid container, the filters, the contour rasterizer and
//! the host adapter so applications depend on a single crate.

pub use lg_core::*;
pub use lg_draw::*;
pub use lg_filter::*;
pub use lg_host::*;
