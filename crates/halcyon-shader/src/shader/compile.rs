use crate::gl::{GraphicsApi, ShaderStage};

use super::{BuildOptions, ShaderError};

/// Compiles one stage.
///
/// Blank source is rejected before any GPU object exists. On compile failure
/// the shader object is deleted again, so a failed call leaves nothing behind.
/// On success the caller owns the returned shader.
pub fn compile<G: GraphicsApi>(
    gl: &G,
    source: &str,
    stage: ShaderStage,
    options: &BuildOptions,
) -> Result<G::Shader, ShaderError> {
    if source.trim().is_empty() {
        return Err(ShaderError::InvalidSource { stage });
    }

    let shader = gl
        .create_shader(stage)
        .map_err(|reason| ShaderError::AllocationFailed { object: "shader", reason })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.shader_compile_status(shader) {
        return Ok(shader);
    }

    let log = if options.diagnostics {
        gl.shader_info_log(shader)
    } else {
        String::new()
    };
    gl.delete_shader(shader);

    Err(ShaderError::CompileFailed { stage, log })
}
