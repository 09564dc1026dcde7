use lg_core::Gray;
use lg_filter::kernels::{sobel_x, sobel_y};
use lg_filter::mask_filter;

/// Stage producing the `dx`/`dy` gradient components of a source grid.
///
/// The pipeline does not prescribe how gradients are computed; implementors
/// must reshape both outputs to the dimensions of `src`.
pub trait GradientSource {
    fn compute(&mut self, src: &Gray, dx: &mut Gray, dy: &mut Gray);
}

impl<F> GradientSource for F
where
    F: FnMut(&Gray, &mut Gray, &mut Gray),
{
    fn compute(&mut self, src: &Gray, dx: &mut Gray, dy: &mut Gray) {
        self(src, dx, dy)
    }
}

/// 3x3 Sobel components through [`mask_filter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SobelGradient;

impl GradientSource for SobelGradient {
    fn compute(&mut self, src: &Gray, dx: &mut Gray, dy: &mut Gray) {
        mask_filter(src, dx, &sobel_x());
        mask_filter(src, dy, &sobel_y());
    }
}

/// Components computed elsewhere (for example on the host side) and handed
/// in before each frame.
#[derive(Debug, Clone, Default)]
pub struct ProvidedGradient {
    dx: Gray,
    dy: Gray,
}

impl ProvidedGradient {
    pub fn new(dx: Gray, dy: Gray) -> Self {
        Self { dx, dy }
    }

    pub fn set(&mut self, dx: Gray, dy: Gray) {
        self.dx = dx;
        self.dy = dy;
    }
}

impl GradientSource for ProvidedGradient {
    fn compute(&mut self, _src: &Gray, dx: &mut Gray, dy: &mut Gray) {
        dx.clone_from(&self.dx);
        dy.clone_from(&self.dy);
    }
}
