use bytemuck::{Pod, Zeroable};

use mandelview_engine::coords::Viewport;
use mandelview_engine::render::{ProgramError, ShaderProgram};

use crate::view::View;

/// WGSL source of the Mandelbrot program.
pub const MANDELBROT_WGSL: &str = include_str!("shaders/mandelbrot.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Uniform block of the Mandelbrot program (`ViewParams` in WGSL).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ViewUniform {
    pub center: [f32; 2],
    pub resolution: [f32; 2],
    pub zoom: f32,
    pub max_iterations: u32,
    pub _pad: [f32; 2],
}

impl ViewUniform {
    pub fn new(view: &View, viewport: Viewport, max_iterations: u32) -> Self {
        Self {
            center: view.center.to_array(),
            resolution: viewport.resolution(),
            zoom: view.zoom(),
            max_iterations: max_iterations.max(1),
            _pad: [0.0; 2],
        }
    }
}

/// Compiles and links the Mandelbrot program.
pub fn mandelbrot_program() -> Result<ShaderProgram, ProgramError> {
    ShaderProgram::build("mandelbrot", MANDELBROT_WGSL, VERTEX_ENTRY, FRAGMENT_ENTRY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandelview_engine::coords::Vec2;

    #[test]
    fn program_compiles_and_links() {
        let program = mandelbrot_program().unwrap();
        assert_eq!(program.vertex_entry(), VERTEX_ENTRY);
        assert_eq!(program.fragment_entry(), FRAGMENT_ENTRY);
    }

    #[test]
    fn uniform_matches_wgsl_struct_size() {
        // vec2 + vec2 + f32 + u32 + vec2 = 32 bytes, a multiple of 16.
        assert_eq!(std::mem::size_of::<ViewUniform>(), 32);
    }

    #[test]
    fn uniform_carries_view_state() {
        let view = View::new(Vec2::new(-0.75, 0.1), 2.5);
        let u = ViewUniform::new(&view, Viewport::new(800.0, 600.0), 256);
        assert_eq!(u.center, [-0.75, 0.1]);
        assert_eq!(u.zoom, 2.5);
        assert_eq!(u.resolution, [800.0, 600.0]);
        assert_eq!(u.max_iterations, 256);
    }

    #[test]
    fn degenerate_viewport_never_divides_by_zero() {
        let u = ViewUniform::new(&View::default(), Viewport::new(0.0, 0.0), 0);
        assert_eq!(u.resolution, [1.0, 1.0]);
        assert_eq!(u.max_iterations, 1);
    }
}
