/// Iteration cap of the escape-time loop.
pub const MAX_ITERATIONS: u32 = 256;

/// Tunables of the viewer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Escape-time iteration cap; also the grayscale divisor.
    pub max_iterations: u32,

    /// Pan distance per frame is `pan_factor / zoom`.
    pub pan_factor: f32,

    /// Zoom is multiplied or divided by this per frame a zoom key is held.
    pub zoom_step: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            pan_factor: 0.1,
            zoom_step: 1.1,
        }
    }
}
