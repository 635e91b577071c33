use crate::gl::{GraphicsApi, ShaderStage};

use super::symbols::{Attribute, Symbol};
use super::{BuildOptions, ShaderError};

/// Links a vertex and a fragment stage into a program.
///
/// Takes ownership of both stages: they are deleted before this returns,
/// whatever the outcome. The predefined attributes are bound to their fixed
/// locations before the link, since GL ignores bindings made afterwards.
/// Only a program whose link status is confirmed is returned.
pub fn link<G: GraphicsApi>(
    gl: &G,
    vertex: Option<G::Shader>,
    fragment: Option<G::Shader>,
    options: &BuildOptions,
) -> Result<G::Program, ShaderError> {
    let (vertex, fragment) = match (vertex, fragment) {
        (Some(v), Some(f)) => (v, f),
        (v, f) => {
            let stage = if v.is_none() { ShaderStage::Vertex } else { ShaderStage::Fragment };
            for shader in v.into_iter().chain(f) {
                gl.delete_shader(shader);
            }
            return Err(ShaderError::MissingStage { stage });
        }
    };

    let result = link_stages(gl, vertex, fragment, options);

    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    result
}

fn link_stages<G: GraphicsApi>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
    options: &BuildOptions,
) -> Result<G::Program, ShaderError> {
    let program = gl
        .create_program()
        .map_err(|reason| ShaderError::AllocationFailed { object: "program", reason })?;

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);

    for &attribute in Attribute::ALL {
        gl.bind_attrib_location(program, attribute.fixed_location(), attribute.name());
    }

    gl.link_program(program);
    let linked = gl.program_link_status(program);

    let log = if !linked && options.diagnostics {
        gl.program_info_log(program)
    } else {
        String::new()
    };

    // A linked program keeps its own copy of the binaries.
    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);

    if linked {
        Ok(program)
    } else {
        gl.delete_program(program);
        Err(ShaderError::LinkFailed { log })
    }
}
