//! Real-time Mandelbrot viewer.
//!
//! W/A/S/D pan, Q/E change zoom, closing the window quits.

use anyhow::Result;
use winit::dpi::LogicalSize;

use mandelview_engine::device::GpuInit;
use mandelview_engine::logging::{init_logging, LoggingConfig};
use mandelview_engine::window::{Runtime, RuntimeConfig};

use mandelview::config::ViewerConfig;
use mandelview::controls::KeyBindings;
use mandelview::shader;
use mandelview::viewer::Viewer;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Fails here, before any window exists, if the shader does not build.
    let program = shader::mandelbrot_program()?;

    let viewer = Viewer::new(ViewerConfig::default(), KeyBindings::default(), program);

    let runtime = RuntimeConfig {
        title: "Mandelbrot".to_string(),
        initial_size: LogicalSize::new(WIDTH, HEIGHT),
        resizable: false,
    };

    // The shader writes display-ready gray levels; keep the swapchain linear.
    let gpu = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(runtime, gpu, viewer)
}
