use glam::Mat4;

/// Named coordinate systems a view can transform between.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CoordSystem {
    World,
    Camera,
    Clip,
}

/// Produces the 4×4 transform from one coordinate system to another.
///
/// Implemented by whatever owns the camera. Shader programs only consume it.
pub trait ViewTransform {
    fn transform(&self, from: CoordSystem, to: CoordSystem) -> Mat4;
}

/// A view described by a fixed view matrix (World→Camera) and projection (Camera→Clip).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Viewport {
    #[inline]
    pub const fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    /// Right-handed perspective camera at `eye` looking at `target`.
    pub fn look_at_perspective(
        eye: glam::Vec3,
        target: glam::Vec3,
        fov_y_radians: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        Self {
            view: Mat4::look_at_rh(eye, target, glam::Vec3::Y),
            projection: Mat4::perspective_rh_gl(fov_y_radians, aspect, z_near, z_far),
        }
    }

    fn forward(&self, from: CoordSystem) -> Mat4 {
        match from {
            CoordSystem::World => self.view,
            CoordSystem::Camera => self.projection,
            CoordSystem::Clip => Mat4::IDENTITY,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

impl ViewTransform for Viewport {
    fn transform(&self, from: CoordSystem, to: CoordSystem) -> Mat4 {
        use CoordSystem::*;

        let rank = |s: CoordSystem| match s {
            World => 0,
            Camera => 1,
            Clip => 2,
        };

        match (from, to) {
            (a, b) if a == b => Mat4::IDENTITY,
            (World, Clip) => self.projection * self.view,
            (a, b) if rank(a) < rank(b) => self.forward(a),
            (a, b) => self.transform(b, a).inverse(),
        }
    }
}
