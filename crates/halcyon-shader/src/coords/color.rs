use bytemuck::{Pod, Zeroable};

/// Linear straight-alpha RGBA color, laid out exactly like a GLSL `vec4`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black, the fallback for unset or disabled material channels.
    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Borrows the color as the `[r, g, b, a]` array uploaded to a `vec4` uniform.
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<[f32; 4]> for ColorRgba {
    #[inline]
    fn from(v: [f32; 4]) -> Self {
        bytemuck::cast(v)
    }
}

/// 8-bit RGB color, as carried by lights (`0`–`255` per channel).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ColorRgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRgb8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Maps each channel from `[0, 255]` to `[0.0, 1.0]`; alpha is forced to `1.0`.
    #[inline]
    pub fn normalized(self) -> ColorRgba {
        ColorRgba::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        )
    }
}
