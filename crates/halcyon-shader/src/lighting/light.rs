use glam::Vec3;

use crate::coords::ColorRgb8;

/// A directional light.
///
/// Colors are 8-bit per channel; programs normalize them on upload.
/// `direction` is uploaded unmodified (no normalization, no view transform).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub ambient: ColorRgb8,
    pub diffuse: ColorRgb8,
    pub specular: ColorRgb8,
    pub direction: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            ambient: ColorRgb8::new(0, 0, 0),
            diffuse: ColorRgb8::new(255, 255, 255),
            specular: ColorRgb8::new(255, 255, 255),
            direction: Vec3::new(0.0, 0.0, 1.0),
        }
    }
}
