use glam::Mat4;

use crate::coords::{normal_matrix, CoordSystem, MatrixLayout, ViewTransform};
use crate::gl::{GlContext, GraphicsApi, Location, ShaderStage};
use crate::lighting::{Light, Material};

use super::symbols::{Attribute, AttributeLocations, Uniform, UniformLocations};
use super::uniforms::UniformValue;
use super::{compile, link, resolve, BuildOptions, ShaderError};

/// A linked vertex + fragment program with its predefined symbols resolved.
///
/// Instances only exist for programs that compiled, linked and resolved; any
/// failure along the way yields a [`ShaderError`] and leaves no GPU objects
/// behind.
///
/// Uniform uploads go to the context's current program, so every runtime
/// operation expects this program to be active (see [`activate`](Self::activate)).
/// Uniforms the program does not declare are skipped without a driver call.
///
/// The GPU object is freed by [`release`](Self::release). Dropping an
/// unreleased program leaks it and logs a warning.
pub struct ShaderProgram<G: GraphicsApi> {
    handle: G::Program,
    name: String,
    attributes: AttributeLocations,
    uniforms: UniformLocations,

    // Base transforms from the last `setup_viewport`; instance transforms compose onto these.
    model_view: Mat4,
    model_view_projection: Mat4,

    released: bool,
}

impl<G: GraphicsApi> ShaderProgram<G> {
    /// Compiles, links and resolves a program from GLSL source.
    pub fn build(
        ctx: &GlContext<G>,
        name: impl Into<String>,
        vertex_src: &str,
        fragment_src: &str,
        options: &BuildOptions,
    ) -> Result<Self, ShaderError> {
        let name = name.into();

        let (handle, attributes, uniforms) = build_program(ctx.gl(), vertex_src, fragment_src, options)
            .inspect_err(|err| log::error!("shader program '{name}': {err}"))?;

        log::debug!(
            "shader program '{name}' built: attributes [{}], uniforms [{}]",
            attributes
                .present()
                .map(|(a, l)| format!("{a:?}={}", l.raw()))
                .collect::<Vec<_>>()
                .join(", "),
            uniforms
                .present()
                .map(|(u, l)| format!("{u:?}={}", l.raw()))
                .collect::<Vec<_>>()
                .join(", "),
        );

        Ok(Self {
            handle,
            name,
            attributes,
            uniforms,
            model_view: Mat4::IDENTITY,
            model_view_projection: Mat4::IDENTITY,
            released: false,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn handle(&self) -> G::Program {
        self.handle
    }

    #[inline]
    pub fn attributes(&self) -> &AttributeLocations {
        &self.attributes
    }

    #[inline]
    pub fn uniforms(&self) -> &UniformLocations {
        &self.uniforms
    }

    #[inline]
    pub fn attribute_location(&self, attribute: Attribute) -> Location {
        self.attributes.get(attribute)
    }

    #[inline]
    pub fn uniform_location(&self, uniform: Uniform) -> Location {
        self.uniforms.get(uniform)
    }

    #[inline]
    pub fn has_uniform(&self, uniform: Uniform) -> bool {
        self.uniforms.is_present(uniform)
    }

    /// Model-view cached by the last [`setup_viewport`](Self::setup_viewport).
    #[inline]
    pub fn model_view(&self) -> Mat4 {
        self.model_view
    }

    /// Model-view-projection cached by the last [`setup_viewport`](Self::setup_viewport).
    #[inline]
    pub fn model_view_projection(&self) -> Mat4 {
        self.model_view_projection
    }

    // ── activation ────────────────────────────────────────────────────────

    /// Makes this the program used by subsequent draw calls.
    ///
    /// Replaces whatever program was current.
    pub fn activate(&self, ctx: &mut GlContext<G>) {
        ctx.make_current(self.handle);
    }

    /// Leaves the context with no current program.
    pub fn deactivate(&self, ctx: &mut GlContext<G>) {
        ctx.clear_program();
    }

    #[inline]
    pub fn is_active(&self, ctx: &GlContext<G>) -> bool {
        ctx.is_current(self.handle)
    }

    /// Deletes the GPU program. Unbinds it first if it is current.
    pub fn release(mut self, ctx: &mut GlContext<G>) {
        if ctx.is_current(self.handle) {
            ctx.clear_program();
        }
        ctx.gl().delete_program(self.handle);
        self.released = true;
        log::debug!("shader program '{}' released", self.name);
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Uploads the camera transforms for a new draw context and caches the
    /// model-view and model-view-projection as the base for
    /// [`set_model_view_matrix`](Self::set_model_view_matrix).
    ///
    /// Only transforms with a present uniform are computed. The model-view is
    /// computed once and shared when both it and the normal matrix are needed.
    pub fn setup_viewport(&mut self, ctx: &GlContext<G>, view: &impl ViewTransform) {
        self.debug_assert_active(ctx);
        let gl = ctx.gl();

        if self.has_uniform(Uniform::ModelViewProjection) {
            self.model_view_projection = view.transform(CoordSystem::World, CoordSystem::Clip);
            self.upload(gl, Uniform::ModelViewProjection, UniformValue::Mat4(self.model_view_projection));
        }

        if self.has_uniform(Uniform::ModelView) || self.has_uniform(Uniform::Normal) {
            self.model_view = view.transform(CoordSystem::World, CoordSystem::Camera);
            self.upload_model_view(gl, self.model_view);
        }

        if self.has_uniform(Uniform::Projection) {
            let projection = view.transform(CoordSystem::Camera, CoordSystem::Clip);
            self.upload(gl, Uniform::Projection, UniformValue::Mat4(projection));
        }
    }

    /// Re-uploads the transforms for one instance: `base * instance`.
    ///
    /// The cached base is left untouched, so successive calls never compound.
    pub fn set_model_view_matrix(&self, ctx: &GlContext<G>, instance: &Mat4) {
        self.debug_assert_active(ctx);
        let gl = ctx.gl();

        if self.has_uniform(Uniform::ModelView) || self.has_uniform(Uniform::Normal) {
            self.upload_model_view(gl, self.model_view * *instance);
        }

        self.upload(
            gl,
            Uniform::ModelViewProjection,
            UniformValue::Mat4(self.model_view_projection * *instance),
        );
    }

    fn upload_model_view(&self, gl: &G, model_view: Mat4) {
        self.upload(gl, Uniform::ModelView, UniformValue::Mat4(model_view));
        self.upload(
            gl,
            Uniform::Normal,
            UniformValue::Mat3(normal_matrix(&model_view, MatrixLayout::ColumnMajor)),
        );
    }

    // ── lighting ──────────────────────────────────────────────────────────

    /// Uploads the light colors (normalized, opaque) and its direction.
    pub fn setup_light(&self, ctx: &GlContext<G>, light: &Light) {
        self.debug_assert_active(ctx);

        self.upload_all(
            ctx.gl(),
            [
                (Uniform::LightAmbient, UniformValue::Color(light.ambient.normalized())),
                (Uniform::LightDiffuse, UniformValue::Color(light.diffuse.normalized())),
                (Uniform::LightSpecular, UniformValue::Color(light.specular.normalized())),
                (Uniform::LightPosition, UniformValue::Vec3(light.direction.to_array())),
            ],
        );
    }

    /// Uploads the material, resets per-vertex color usage and sets blending
    /// from the material's alpha.
    ///
    /// Blending is context-wide state and stays as set after this draw.
    pub fn setup_material(&self, ctx: &mut GlContext<G>, material: &Material) {
        self.debug_assert_active(ctx);

        self.upload_all(
            ctx.gl(),
            [
                (Uniform::Ambient, UniformValue::Color(material.effective_ambient())),
                (Uniform::Diffuse, UniformValue::Color(material.diffuse)),
                (Uniform::Specular, UniformValue::Color(material.effective_specular())),
                (Uniform::Emission, UniformValue::Color(material.emission)),
                (Uniform::Shininess, UniformValue::Float(material.shininess)),
                (Uniform::UsesVertexColors, UniformValue::Bool(false)),
            ],
        );

        ctx.set_blending(material.is_translucent());
    }

    /// Switches the shader between per-vertex colors and material colors.
    pub fn enable_color_usage(&self, ctx: &GlContext<G>, enabled: bool) {
        self.debug_assert_active(ctx);
        self.upload(ctx.gl(), Uniform::UsesVertexColors, UniformValue::Bool(enabled));
    }

    // ── uploads ───────────────────────────────────────────────────────────

    fn upload(&self, gl: &G, uniform: Uniform, value: UniformValue) {
        let location = self.uniforms.get(uniform);
        if location.is_present() {
            value.upload(gl, location);
        }
    }

    fn upload_all(&self, gl: &G, values: impl IntoIterator<Item = (Uniform, UniformValue)>) {
        for (uniform, value) in values {
            self.upload(gl, uniform, value);
        }
    }

    fn debug_assert_active(&self, ctx: &GlContext<G>) {
        debug_assert!(
            ctx.is_current(self.handle),
            "uniform upload to shader program '{}' while it is not active",
            self.name
        );
    }
}

impl<G: GraphicsApi> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        if !self.released {
            log::warn!(
                "shader program '{}' dropped without release; GPU program {:?} leaked",
                self.name,
                self.handle
            );
        }
    }
}

/// Runs the whole build, deleting every intermediate object on failure.
fn build_program<G: GraphicsApi>(
    gl: &G,
    vertex_src: &str,
    fragment_src: &str,
    options: &BuildOptions,
) -> Result<(G::Program, AttributeLocations, UniformLocations), ShaderError> {
    // Both stages are checked up front so a blank fragment never costs a vertex compile.
    for (stage, source) in [(ShaderStage::Vertex, vertex_src), (ShaderStage::Fragment, fragment_src)] {
        if source.trim().is_empty() {
            return Err(ShaderError::InvalidSource { stage });
        }
    }

    let vertex = compile(gl, vertex_src, ShaderStage::Vertex, options)?;
    let fragment = compile(gl, fragment_src, ShaderStage::Fragment, options)
        .inspect_err(|_| gl.delete_shader(vertex))?;

    let program = link(gl, Some(vertex), Some(fragment), options)?;

    let (attributes, uniforms) = resolve(gl, program).inspect_err(|_| gl.delete_program(program))?;

    Ok((program, attributes, uniforms))
}
