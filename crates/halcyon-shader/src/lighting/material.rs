use crate::coords::ColorRgba;

/// Surface material.
///
/// An ambient color with `a <= 0` counts as unset and is uploaded as opaque
/// black. When `shine` is false the specular color is ignored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub ambient: ColorRgba,
    pub diffuse: ColorRgba,
    pub specular: ColorRgba,
    pub emission: ColorRgba,
    pub shine: bool,
    pub shininess: f32,
    /// Overall opacity; values below `1.0` turn on blending during setup.
    pub alpha: f32,
}

impl Material {
    /// The ambient color to upload, with the unset-alpha fallback applied.
    #[inline]
    pub fn effective_ambient(&self) -> ColorRgba {
        if self.ambient.a <= 0.0 {
            ColorRgba::black()
        } else {
            self.ambient
        }
    }

    /// The specular color to upload, black unless the material shines.
    #[inline]
    pub fn effective_specular(&self) -> ColorRgba {
        if self.shine {
            self.specular
        } else {
            ColorRgba::black()
        }
    }

    #[inline]
    pub fn is_translucent(&self) -> bool {
        self.alpha < 1.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: ColorRgba::new(0.0, 0.0, 0.0, 0.0),
            diffuse: ColorRgba::white(),
            specular: ColorRgba::white(),
            emission: ColorRgba::black(),
            shine: false,
            shininess: 0.0,
            alpha: 1.0,
        }
    }
}
