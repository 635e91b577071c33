use crate::gl::ShaderStage;

/// Why a shader program could not be built.
///
/// Every variant is terminal for the build attempt: no program object
/// survives it and nothing is retried. `log` fields carry the driver's info
/// log when diagnostics are enabled and are empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShaderError {
    #[error("{stage} shader source is empty")]
    InvalidSource { stage: ShaderStage },

    #[error("{stage} shader failed to compile: {log}")]
    CompileFailed { stage: ShaderStage, log: String },

    #[error("cannot link program without a {stage} shader")]
    MissingStage { stage: ShaderStage },

    #[error("failed to allocate GPU {object} object: {reason}")]
    AllocationFailed { object: &'static str, reason: String },

    #[error("program failed to link: {log}")]
    LinkFailed { log: String },

    /// Symbol resolution was asked about a handle that is not a linked program.
    #[error("handle does not name a linked program")]
    InvalidProgram,
}
