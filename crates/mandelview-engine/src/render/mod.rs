//! GPU rendering subsystem.
//!
//! - `program` compiles and checks WGSL before any GPU object is created.
//! - `fullscreen` draws one program over the whole target with a 4-vertex
//!   triangle strip, feeding it a single uniform block.
//!
//! Each renderer owns its GPU resources (pipeline, buffers) and creates them
//! lazily on first use, recreating the pipeline if the surface format changes.

mod ctx;
pub mod fullscreen;
pub mod program;

pub use ctx::{RenderCtx, RenderTarget};
pub use fullscreen::FullscreenRenderer;
pub use program::{ProgramError, ShaderProgram};
