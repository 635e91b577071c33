use super::GraphicsApi;

/// Rendering context: the graphics API plus the global pipeline state shader
/// programs touch.
///
/// GL has exactly one current program and one blend enable per context. This
/// type is the single owner of both, so callers (and tests) can observe them
/// without querying the driver.
pub struct GlContext<G: GraphicsApi> {
    gl: G,
    current: Option<G::Program>,
    blending: bool,
}

impl<G: GraphicsApi> GlContext<G> {
    /// Wraps a freshly created context. GL starts with no program and blending off.
    pub fn new(gl: G) -> Self {
        Self {
            gl,
            current: None,
            blending: false,
        }
    }

    #[inline]
    pub fn gl(&self) -> &G {
        &self.gl
    }

    pub fn into_inner(self) -> G {
        self.gl
    }

    /// The program subsequent draw calls will use, if any.
    #[inline]
    pub fn current_program(&self) -> Option<G::Program> {
        self.current
    }

    #[inline]
    pub fn is_current(&self, program: G::Program) -> bool {
        self.current == Some(program)
    }

    #[inline]
    pub fn is_blending(&self) -> bool {
        self.blending
    }

    /// Unbinds whatever program is current.
    pub fn clear_program(&mut self) {
        self.gl.use_program(None);
        self.current = None;
    }

    /// Replaces the current program. A previously current program is silently unbound.
    pub(crate) fn make_current(&mut self, program: G::Program) {
        if let Some(previous) = self.current.filter(|&p| p != program) {
            log::trace!("program {previous:?} replaced by {program:?} without deactivation");
        }
        self.gl.use_program(Some(program));
        self.current = Some(program);
    }

    pub(crate) fn set_blending(&mut self, enabled: bool) {
        self.gl.set_blend(enabled);
        self.blending = enabled;
    }
}
