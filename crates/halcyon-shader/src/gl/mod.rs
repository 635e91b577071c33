//! Graphics-context capability.
//!
//! Shader programs never call OpenGL directly. They go through
//! [`GraphicsApi`], which `glow::Context` implements on native targets, and
//! keep global pipeline state (current program, blending) in a [`GlContext`].
//!
//! Everything here assumes the single thread that owns the current GL
//! context. There is no locking.

mod api;
mod context;
mod native;

#[cfg(test)]
pub(crate) mod recording;

pub use api::{GraphicsApi, Location, ShaderStage};
pub use context::GlContext;
