//! Colors used by the frame loop (clear color).

pub mod color;

pub use color::Color;
