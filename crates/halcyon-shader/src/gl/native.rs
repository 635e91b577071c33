//! `glow` backend.
//!
//! Every call is a plain GL entry point. `glow` marks them `unsafe` because the
//! context must be current on the calling thread. Callers only ever drive a
//! `GlContext` from the thread that made its context current.

#![cfg(not(target_arch = "wasm32"))]

use glow::HasContext;

use super::{GraphicsApi, Location, ShaderStage};

fn native_location(location: Location) -> Option<glow::NativeUniformLocation> {
    location.index().map(glow::NativeUniformLocation)
}

impl GraphicsApi for glow::Context {
    type Shader = glow::NativeShader;
    type Program = glow::NativeProgram;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        let kind = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe { HasContext::create_shader(self, kind) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn bind_attrib_location(&self, program: Self::Program, index: u32, name: &str) {
        unsafe { HasContext::bind_attrib_location(self, program, index, name) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn is_program(&self, program: Self::Program) -> bool {
        unsafe { HasContext::is_program(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Location {
        unsafe { self.get_attrib_location(program, name) }
            .map_or(Location::ABSENT, Location::from_index)
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Location {
        unsafe { self.get_uniform_location(program, name) }
            .map_or(Location::ABSENT, |l| Location::from_index(l.0))
    }

    fn uniform_1_i32(&self, location: Location, value: i32) {
        unsafe { HasContext::uniform_1_i32(self, native_location(location).as_ref(), value) }
    }

    fn uniform_1_f32(&self, location: Location, value: f32) {
        unsafe { HasContext::uniform_1_f32(self, native_location(location).as_ref(), value) }
    }

    fn uniform_3_f32(&self, location: Location, value: &[f32; 3]) {
        unsafe { self.uniform_3_f32_slice(native_location(location).as_ref(), value) }
    }

    fn uniform_4_f32(&self, location: Location, value: &[f32; 4]) {
        unsafe { self.uniform_4_f32_slice(native_location(location).as_ref(), value) }
    }

    fn uniform_matrix_3(&self, location: Location, value: &[f32; 9]) {
        unsafe { self.uniform_matrix_3_f32_slice(native_location(location).as_ref(), false, value) }
    }

    fn uniform_matrix_4(&self, location: Location, value: &[f32; 16]) {
        unsafe { self.uniform_matrix_4_f32_slice(native_location(location).as_ref(), false, value) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn set_blend(&self, enabled: bool) {
        unsafe {
            if enabled {
                self.enable(glow::BLEND);
                self.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
            } else {
                self.disable(glow::BLEND);
            }
        }
    }
}
