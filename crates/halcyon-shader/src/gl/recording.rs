//! In-memory `GraphicsApi` used by unit tests.
//!
//! Objects are plain integer ids. Compilation succeeds when the source has a
//! `main(` entry point and no `#error`. Linking assigns uniform locations in
//! declaration order and attribute locations from `bind_attrib_location`
//! (unbound attributes get locations from 16 upward).

use std::cell::RefCell;
use std::collections::HashMap;

use super::{GraphicsApi, Location, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UploadValue {
    I32(i32),
    F32(f32),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Mat3([f32; 9]),
    Mat4([f32; 16]),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateShader(ShaderStage, u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    BindAttribLocation { program: u32, index: u32, name: String },
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    SetBlend(bool),
    Upload { program: Option<u32>, location: Location, value: UploadValue },
}

struct ShaderObject {
    stage: ShaderStage,
    source: String,
    compiled: bool,
}

#[derive(Default)]
struct ProgramObject {
    attached: Vec<u32>,
    bindings: HashMap<String, u32>,
    linked: bool,
    log: String,
    attributes: HashMap<String, u32>,
    uniforms: HashMap<String, u32>,
}

#[derive(Default)]
struct State {
    next_id: u32,
    shaders: HashMap<u32, ShaderObject>,
    programs: HashMap<u32, ProgramObject>,
    current: Option<u32>,
    blend: bool,
    calls: Vec<Call>,
    fail_link: bool,
    fail_program_alloc: bool,
    fail_shader_alloc: bool,
}

impl State {
    fn alloc(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub(crate) struct RecordingGl {
    state: RefCell<State>,
}

/// Identifier-ish tokens of a GLSL source, punctuation stripped.
fn tokens(source: &str) -> Vec<&str> {
    source
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Names following `<keyword> <type>` in declaration order.
fn declared<'a>(source: &'a str, keywords: &[&str]) -> Vec<&'a str> {
    let toks = tokens(source);
    toks.windows(3)
        .filter(|w| keywords.contains(&w[0]))
        .map(|w| w[2])
        .collect()
}

impl RecordingGl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Every uniform upload since the last `clear_calls`, in order.
    pub(crate) fn uploads(&self) -> Vec<(Location, UploadValue)> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Upload { location, value, .. } => Some((*location, value.clone())),
                _ => None,
            })
            .collect()
    }

    /// The most recent value uploaded to `location`.
    pub(crate) fn last_upload(&self, location: Location) -> Option<UploadValue> {
        self.uploads()
            .into_iter()
            .rev()
            .find(|(l, _)| *l == location)
            .map(|(_, v)| v)
    }

    pub(crate) fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub(crate) fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub(crate) fn blend_enabled(&self) -> bool {
        self.state.borrow().blend
    }

    pub(crate) fn fail_link(&self, fail: bool) {
        self.state.borrow_mut().fail_link = fail;
    }

    pub(crate) fn fail_program_allocation(&self, fail: bool) {
        self.state.borrow_mut().fail_program_alloc = fail;
    }

    pub(crate) fn fail_shader_allocation(&self, fail: bool) {
        self.state.borrow_mut().fail_shader_alloc = fail;
    }

    fn upload(&self, location: Location, value: UploadValue) {
        let mut state = self.state.borrow_mut();
        let program = state.current;
        state.calls.push(Call::Upload { program, location, value });
    }
}

impl GraphicsApi for RecordingGl {
    type Shader = u32;
    type Program = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        if state.fail_shader_alloc {
            return Err("out of shader objects".into());
        }
        let id = state.alloc();
        state.shaders.insert(id, ShaderObject { stage, source: String::new(), compiled: false });
        state.calls.push(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(s) = self.state.borrow_mut().shaders.get_mut(&shader) {
            s.source = source.to_owned();
        }
    }

    fn compile_shader(&self, shader: u32) {
        if let Some(s) = self.state.borrow_mut().shaders.get_mut(&shader) {
            s.compiled = s.source.contains("main(") && !s.source.contains("#error");
        }
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state.borrow().shaders.get(&shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        match self.state.borrow().shaders.get(&shader) {
            Some(s) if !s.compiled => format!("0:1: error: {} stage rejected", s.stage),
            _ => String::new(),
        }
    }

    fn delete_shader(&self, shader: u32) {
        let mut state = self.state.borrow_mut();
        state.shaders.remove(&shader);
        state.calls.push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        if state.fail_program_alloc {
            return Err("out of program objects".into());
        }
        let id = state.alloc();
        state.programs.insert(id, ProgramObject::default());
        state.calls.push(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state.borrow_mut();
        if let Some(p) = state.programs.get_mut(&program) {
            p.attached.push(shader);
        }
        state.calls.push(Call::AttachShader { program, shader });
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state.borrow_mut();
        if let Some(p) = state.programs.get_mut(&program) {
            p.attached.retain(|&s| s != shader);
        }
        state.calls.push(Call::DetachShader { program, shader });
    }

    fn bind_attrib_location(&self, program: u32, index: u32, name: &str) {
        let mut state = self.state.borrow_mut();
        if let Some(p) = state.programs.get_mut(&program) {
            p.bindings.insert(name.to_owned(), index);
        }
        state.calls.push(Call::BindAttribLocation { program, index, name: name.to_owned() });
    }

    fn link_program(&self, program: u32) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::LinkProgram(program));

        let fail_link = state.fail_link;
        let State { shaders, programs, .. } = &mut *state;
        let Some(p) = programs.get_mut(&program) else { return };

        let stages: Vec<&ShaderObject> = p.attached.iter().filter_map(|id| shaders.get(id)).collect();
        let vertex = stages.iter().find(|s| s.stage == ShaderStage::Vertex && s.compiled);
        let fragment = stages.iter().find(|s| s.stage == ShaderStage::Fragment && s.compiled);

        let (Some(vertex), Some(fragment)) = (vertex, fragment) else {
            p.linked = false;
            p.log = "error: program needs a compiled vertex and fragment shader".into();
            return;
        };
        if fail_link {
            p.linked = false;
            p.log = "error: varying mismatch between stages".into();
            return;
        }

        let mut next_unbound = 16;
        let mut attributes = HashMap::new();
        for name in declared(&vertex.source, &["in", "attribute"]) {
            let index = p.bindings.get(name).copied().unwrap_or_else(|| {
                next_unbound += 1;
                next_unbound - 1
            });
            attributes.insert(name.to_owned(), index);
        }

        let mut uniforms = HashMap::new();
        for source in [&vertex.source, &fragment.source] {
            for name in declared(source, &["uniform"]) {
                let next = uniforms.len() as u32;
                uniforms.entry(name.to_owned()).or_insert(next);
            }
        }

        p.attributes = attributes;
        p.uniforms = uniforms;
        p.linked = true;
        p.log.clear();
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state.borrow().programs.get(&program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        self.state.borrow().programs.get(&program).map(|p| p.log.clone()).unwrap_or_default()
    }

    fn is_program(&self, program: u32) -> bool {
        self.state.borrow().programs.contains_key(&program)
    }

    fn delete_program(&self, program: u32) {
        let mut state = self.state.borrow_mut();
        state.programs.remove(&program);
        state.calls.push(Call::DeleteProgram(program));
    }

    fn attrib_location(&self, program: u32, name: &str) -> Location {
        self.state
            .borrow()
            .programs
            .get(&program)
            .and_then(|p| p.attributes.get(name).copied())
            .map_or(Location::ABSENT, Location::from_index)
    }

    fn uniform_location(&self, program: u32, name: &str) -> Location {
        self.state
            .borrow()
            .programs
            .get(&program)
            .and_then(|p| p.uniforms.get(name).copied())
            .map_or(Location::ABSENT, Location::from_index)
    }

    fn uniform_1_i32(&self, location: Location, value: i32) {
        self.upload(location, UploadValue::I32(value));
    }

    fn uniform_1_f32(&self, location: Location, value: f32) {
        self.upload(location, UploadValue::F32(value));
    }

    fn uniform_3_f32(&self, location: Location, value: &[f32; 3]) {
        self.upload(location, UploadValue::Vec3(*value));
    }

    fn uniform_4_f32(&self, location: Location, value: &[f32; 4]) {
        self.upload(location, UploadValue::Vec4(*value));
    }

    fn uniform_matrix_3(&self, location: Location, value: &[f32; 9]) {
        self.upload(location, UploadValue::Mat3(*value));
    }

    fn uniform_matrix_4(&self, location: Location, value: &[f32; 16]) {
        self.upload(location, UploadValue::Mat4(*value));
    }

    fn use_program(&self, program: Option<u32>) {
        let mut state = self.state.borrow_mut();
        state.current = program;
        state.calls.push(Call::UseProgram(program));
    }

    fn set_blend(&self, enabled: bool) {
        let mut state = self.state.borrow_mut();
        state.blend = enabled;
        state.calls.push(Call::SetBlend(enabled));
    }
}
