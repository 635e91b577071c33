/// Build-time configuration for shader programs.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Fetch compile/link info logs on failure.
    ///
    /// Failures are reported either way; this only decides whether the
    /// driver's (sometimes expensive) log query is made.
    pub diagnostics: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            diagnostics: cfg!(debug_assertions),
        }
    }
}

impl BuildOptions {
    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}
