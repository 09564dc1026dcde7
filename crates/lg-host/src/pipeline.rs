use core::mem;

use lg_core::{Error, Gray};
use lg_filter::{EDGE_ON, Kernel2D, edge_amp_dir, mask_filter, mean3, zero_crossing};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::HostError;
use crate::frame::LumaFrame;
use crate::gradient::{GradientSource, SobelGradient};

/// Field the zero-crossing test runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroCrossingInput {
    /// Gradient amplitude, as wired by the camera glue. Non-negative, so it
    /// only yields crossings if the gradient source produces signed output.
    #[default]
    Amplitude,
    /// The (optionally pre-filtered) intensity grid.
    Intensity,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Run `mean3` on the imported frame first.
    pub pre_smooth: bool,
    pub zero_crossing_input: ZeroCrossingInput,
    /// Square mask applied after smoothing, row-major.
    pub pre_kernel: Option<Vec<f32>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSummary {
    pub width: usize,
    pub height: usize,
    pub edge_pixels: usize,
    pub mean_amplitude: f32,
}

/// Frame-to-edge-map wiring with reusable working grids.
///
/// Grids are reshaped per frame and reused across calls, so a pipeline kept
/// alive for a camera stream does not allocate once frame dimensions settle.
#[derive(Debug)]
pub struct FramePipeline<G = SobelGradient> {
    config: PipelineConfig,
    gradient: G,
    src: Gray,
    scratch: Gray,
    dx: Gray,
    dy: Gray,
    amp: Gray,
    dir: Gray,
    edges: Gray,
}

impl FramePipeline<SobelGradient> {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_gradient(config, SobelGradient)
    }
}

impl Default for FramePipeline<SobelGradient> {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl<G: GradientSource> FramePipeline<G> {
    pub fn with_gradient(config: PipelineConfig, gradient: G) -> Self {
        Self {
            config,
            gradient,
            src: Gray::new(),
            scratch: Gray::new(),
            dx: Gray::new(),
            dy: Gray::new(),
            amp: Gray::new(),
            dir: Gray::new(),
            edges: Gray::new(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn gradient_mut(&mut self) -> &mut G {
        &mut self.gradient
    }

    pub fn process(&mut self, frame: &LumaFrame<'_>) -> Result<FrameSummary, HostError> {
        frame.copy_into(&mut self.src)?;
        self.run()
    }

    /// Same as [`FramePipeline::process`] for a grid already in memory.
    pub fn process_grid(&mut self, grid: &Gray) -> Result<FrameSummary, HostError> {
        if grid.is_empty() {
            return Err(Error::EmptyDimensions.into());
        }
        self.src.clone_from(grid);
        self.run()
    }

    fn run(&mut self) -> Result<FrameSummary, HostError> {
        if self.config.pre_smooth {
            mean3(&self.src, &mut self.scratch);
            mem::swap(&mut self.src, &mut self.scratch);
        }

        if let Some(taps) = &self.config.pre_kernel {
            let kernel = Kernel2D::square(taps)
                .inspect_err(|err| warn!(%err, "rejecting pre-filter kernel"))?;
            mask_filter(&self.src, &mut self.scratch, &kernel);
            mem::swap(&mut self.src, &mut self.scratch);
        }

        self.gradient.compute(&self.src, &mut self.dx, &mut self.dy);
        let expected = (self.src.width(), self.src.height());
        for g in [&self.dx, &self.dy] {
            let actual = (g.width(), g.height());
            if actual != expected {
                warn!(?expected, ?actual, "gradient source produced wrong shape");
                return Err(HostError::GradientMismatch { expected, actual });
            }
        }

        edge_amp_dir(&self.dx, &self.dy, &mut self.amp, &mut self.dir);

        let value = match self.config.zero_crossing_input {
            ZeroCrossingInput::Amplitude => &self.amp,
            ZeroCrossingInput::Intensity => &self.src,
        };
        zero_crossing(value, &self.dir, &mut self.edges);

        let summary = self.summarize();
        debug!(
            width = summary.width,
            height = summary.height,
            edge_pixels = summary.edge_pixels,
            mean_amplitude = summary.mean_amplitude,
            "frame processed"
        );
        Ok(summary)
    }

    fn summarize(&self) -> FrameSummary {
        let (w, h) = (self.edges.width(), self.edges.height());
        let mut edge_pixels = 0usize;
        let mut amp_sum = 0.0f64;
        for y in 0..h {
            edge_pixels += self.edges.row(y).iter().filter(|&&v| v == EDGE_ON).count();
            amp_sum += self.amp.row(y).iter().map(|&a| a as f64).sum::<f64>();
        }

        FrameSummary {
            width: w,
            height: h,
            edge_pixels,
            mean_amplitude: (amp_sum / (w * h) as f64) as f32,
        }
    }

    /// Working grid after pre-filtering, as fed to the gradient source.
    pub fn source(&self) -> &Gray {
        &self.src
    }

    pub fn amplitude(&self) -> &Gray {
        &self.amp
    }

    pub fn direction(&self) -> &Gray {
        &self.dir
    }

    pub fn edges(&self) -> &Gray {
        &self.edges
    }

    /// Writes the last edge map into a host byte buffer, 255 for edges and
    /// 0 elsewhere. `stride` is in bytes; the last row may omit padding.
    pub fn export_edges(&self, dst: &mut [u8], stride: usize) -> Result<(), HostError> {
        let (w, h) = (self.edges.width(), self.edges.height());
        if stride < w {
            return Err(HostError::InvalidStride {
                stride: i32::try_from(stride).unwrap_or(i32::MAX),
                width: i32::try_from(w).unwrap_or(i32::MAX),
            });
        }
        if w == 0 || h == 0 {
            return Ok(());
        }

        let too_small = |expected| HostError::BufferTooSmall {
            expected,
            actual: dst.len(),
        };
        let expected = (h - 1)
            .checked_mul(stride)
            .and_then(|v| v.checked_add(w))
            .ok_or_else(|| too_small(usize::MAX))?;
        if dst.len() < expected {
            return Err(too_small(expected));
        }

        // Every row start is at most `(h - 1) * stride`, checked above.
        for (y, row) in dst.chunks_mut(stride).take(h).enumerate() {
            for (d, &e) in row[..w].iter_mut().zip(self.edges.row(y)) {
                *d = if e == EDGE_ON { 255 } else { 0 };
            }
        }
        Ok(())
    }
}
