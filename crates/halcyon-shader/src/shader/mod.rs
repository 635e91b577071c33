//! Shader program construction and per-frame uniform updates.
//!
//! Build pipeline: [`compile`] each stage, [`link`] them with the predefined
//! attribute bindings, then [`resolve`] every predefined symbol. [`ShaderProgram`]
//! wraps the result and is the only thing most callers touch.

mod compile;
mod error;
mod link;
mod options;
mod program;
mod symbols;
mod uniforms;

pub use compile::compile;
pub use error::ShaderError;
pub use link::link;
pub use options::BuildOptions;
pub use program::ShaderProgram;
pub use symbols::{
    resolve, Attribute, AttributeLocations, Symbol, SymbolTable, Uniform, UniformLocations,
    ATTRIBUTE_COUNT, UNIFORM_COUNT,
};
