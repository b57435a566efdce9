//! Mandelbrot viewer: view state, key bindings, the GPU program and its CPU
//! reference.

pub mod config;
pub mod controls;
pub mod escape;
pub mod shader;
pub mod view;
pub mod viewer;
