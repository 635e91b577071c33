//! Halcyon shader crate.
//!
//! Owns the lifecycle of GL shader programs and the binding between a fixed
//! vocabulary of vertex attributes / uniforms and their GPU locations.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`shader`] | `ShaderProgram`, compile / link / resolve, `ShaderError` |
//! | [`gl`] | `GraphicsApi` capability, `GlContext`, `Location` |
//! | [`coords`] | colors, coordinate systems, normal-matrix reduction |
//! | [`lighting`] | `Light`, `Material` |
//! | [`logging`] | logger initialization |
//!
//! # Usage
//!
//! ```ignore
//! let mut ctx = GlContext::new(glow_context);
//! let mut program = ShaderProgram::build(&ctx, "lit", VS, FS, &BuildOptions::default())?;
//!
//! program.activate(&mut ctx);
//! program.setup_viewport(&ctx, &camera);
//! program.setup_light(&ctx, &sun);
//! program.setup_material(&mut ctx, &material);
//! for instance in &instances {
//!     program.set_model_view_matrix(&ctx, &instance.transform);
//!     // draw
//! }
//! program.deactivate(&mut ctx);
//! ```

pub mod coords;
pub mod gl;
pub mod lighting;
pub mod logging;
pub mod shader;

pub use gl::{GlContext, GraphicsApi, Location, ShaderStage};
pub use shader::{Attribute, BuildOptions, ShaderError, ShaderProgram, Uniform};
