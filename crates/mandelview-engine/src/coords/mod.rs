//! Coordinate types shared by the runtime, renderers and applications.
//!
//! `Vec2` is a plain 2D float vector; it carries no unit of its own; callers
//! decide whether it is a pixel offset or a point in the complex plane.
//! `Viewport` is the drawable size in physical pixels.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
