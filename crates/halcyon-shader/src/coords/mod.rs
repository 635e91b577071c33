//! Colors, coordinate systems and the small amount of matrix work shader
//! programs need on the CPU.
//!
//! Matrices are `glam::Mat4` (column-major, column vectors). Composition reads
//! right to left: `base * instance` applies `instance` first.

mod color;
mod matrix;
mod viewport;

pub use color::{ColorRgb8, ColorRgba};
pub use matrix::{normal_matrix, MatrixLayout};
pub use viewport::{CoordSystem, ViewTransform, Viewport};
