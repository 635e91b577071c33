use std::fmt;

/// Programmable pipeline stage a shader object is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Attribute or uniform location inside a linked program.
///
/// Absence is a normal state (the symbol was not declared, or the linker
/// optimized it away) and is encoded as a negative value, as GL does.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Location(i32);

impl Location {
    pub const ABSENT: Self = Self(-1);

    /// Wraps a raw GL location. Any negative value means absent.
    #[inline]
    pub const fn new(raw: i32) -> Self {
        if raw < 0 { Self::ABSENT } else { Self(raw) }
    }

    #[inline]
    pub const fn from_index(index: u32) -> Self {
        Self::new(index as i32)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_present(self) -> bool {
        self.0 >= 0
    }

    /// The location as an unsigned GL index, if present.
    #[inline]
    pub fn index(self) -> Option<u32> {
        u32::try_from(self.0).ok()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::ABSENT
    }
}

/// The subset of a GL-style graphics API used to build and drive shader programs.
///
/// Handles are opaque and `Copy`; the caller owns every object it creates and
/// must delete it. Uniform uploads apply to the currently used program and are
/// only issued for present locations. Matrices are column-major.
pub trait GraphicsApi {
    type Shader: Copy + Eq + fmt::Debug;
    type Program: Copy + Eq + fmt::Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Only honored for links that happen after the call.
    fn bind_attrib_location(&self, program: Self::Program, index: u32, name: &str);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn is_program(&self, program: Self::Program) -> bool;
    fn delete_program(&self, program: Self::Program);

    fn attrib_location(&self, program: Self::Program, name: &str) -> Location;
    fn uniform_location(&self, program: Self::Program, name: &str) -> Location;

    fn uniform_1_i32(&self, location: Location, value: i32);
    fn uniform_1_f32(&self, location: Location, value: f32);
    fn uniform_3_f32(&self, location: Location, value: &[f32; 3]);
    fn uniform_4_f32(&self, location: Location, value: &[f32; 4]);
    fn uniform_matrix_3(&self, location: Location, value: &[f32; 9]);
    fn uniform_matrix_4(&self, location: Location, value: &[f32; 16]);

    fn use_program(&self, program: Option<Self::Program>);
    fn set_blend(&self, enabled: bool);
}
