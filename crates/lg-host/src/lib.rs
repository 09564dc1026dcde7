//! Adapter between a camera host runtime and the grid filters.
//!
//! The host hands over an 8-bit luminance plane with signed dimensions and a
//! padded row stride. [`LumaFrame`] validates and borrows it, [`FramePipeline`]
//! copies it into reusable grids and runs gradient, polar form and
//! zero-crossing, and [`FramePipeline::export_edges`] writes the binary edge
//! map back to a host buffer. [`overlay_contours`] draws polylines onto a host
//! RGBA framebuffer.
//!
//! The gradient stage is pluggable through [`GradientSource`].

mod error;
mod frame;
mod gradient;
mod overlay;
mod pipeline;

pub use error::HostError;
pub use frame::LumaFrame;
pub use gradient::{GradientSource, ProvidedGradient, SobelGradient};
pub use overlay::overlay_contours;
pub use pipeline::{FramePipeline, FrameSummary, PipelineConfig, ZeroCrossingInput};
