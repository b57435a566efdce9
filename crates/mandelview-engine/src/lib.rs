//! mandelview engine crate.
//!
//! Platform + GPU runtime for full-screen shader applications: one window,
//! one wgpu surface, keyboard input, and a frame loop that hands each redraw
//! to an [`core::App`].

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
