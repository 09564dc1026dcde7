//! Grid filters: box mean, kernel convolution, gradient polar form and
//! zero-crossing thinning.
//!
//! Every entry point takes its inputs by shared reference and its outputs by
//! `&mut`, reshapes the outputs to the input dimensions (zero-filled) and then
//! populates them. Outputs can therefore be reused across frames without
//! reallocation once the dimensions settle.
//!
//! Border handling differs per filter and is part of each filter's contract:
//! - [`mean3`] leaves the border ring at zero.
//! - [`mask_filter`] uses single reflection.
//! - [`zero_crossing`] treats off-grid neighbours as "no crossing".

pub mod gradient;
pub mod kernels;
pub mod mask;
pub mod mean;
pub mod thin;

pub use gradient::edge_amp_dir;
pub use mask::{Kernel2D, mask_filter};
pub use mean::mean3;
pub use thin::{EDGE_OFF, EDGE_ON, SECTOR_OFFSETS, direction_sector, zero_crossing};
