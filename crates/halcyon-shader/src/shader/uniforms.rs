use glam::Mat4;

use crate::coords::ColorRgba;
use crate::gl::{GraphicsApi, Location};

/// A value headed for a single uniform slot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) enum UniformValue {
    Bool(bool),
    Float(f32),
    Vec3([f32; 3]),
    Color(ColorRgba),
    Mat3([f32; 9]),
    Mat4(Mat4),
}

impl UniformValue {
    /// Issues the matching upload call. `location` must be present.
    pub(super) fn upload<G: GraphicsApi>(&self, gl: &G, location: Location) {
        debug_assert!(location.is_present());
        match self {
            Self::Bool(v) => gl.uniform_1_i32(location, i32::from(*v)),
            Self::Float(v) => gl.uniform_1_f32(location, *v),
            Self::Vec3(v) => gl.uniform_3_f32(location, v),
            Self::Color(c) => gl.uniform_4_f32(location, c.as_array()),
            Self::Mat3(m) => gl.uniform_matrix_3(location, m),
            Self::Mat4(m) => gl.uniform_matrix_4(location, &m.to_cols_array()),
        }
    }
}
