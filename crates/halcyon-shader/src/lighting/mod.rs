//! Light and material parameters consumed by shader programs.

mod light;
mod material;

pub use light::Light;
pub use material::Material;
