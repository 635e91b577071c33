//! Predefined attribute and uniform vocabularies and their resolution.

use std::fmt;
use std::marker::PhantomData;

use crate::gl::{GraphicsApi, Location};

use super::ShaderError;

/// A closed vocabulary of shader symbols.
pub trait Symbol: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Dense index into `ALL`.
    fn index(self) -> usize;

    /// GLSL identifier.
    fn name(self) -> &'static str;
}

/// Predefined vertex attributes.
///
/// Their locations are forced before linking, so every program agrees with the
/// mesh layer on which vertex buffer slot feeds which attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Attribute {
    Vertex,
    Normal,
    TexCoord0,
    Color,
}

impl Attribute {
    /// The location this attribute is bound to in every program.
    #[inline]
    pub const fn fixed_location(self) -> u32 {
        self as u32
    }
}

impl Symbol for Attribute {
    const ALL: &'static [Self] = &[Self::Vertex, Self::Normal, Self::TexCoord0, Self::Color];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Vertex => "aVertex",
            Self::Normal => "aNormal",
            Self::TexCoord0 => "aTexCoord0",
            Self::Color => "aColor",
        }
    }
}

/// Predefined uniforms. A program may declare any subset.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Uniform {
    ModelView,
    Projection,
    Normal,
    ModelViewProjection,
    Ambient,
    Diffuse,
    Specular,
    Emission,
    Shininess,
    UsesVertexColors,
    LightAmbient,
    LightDiffuse,
    LightSpecular,
    LightPosition,
}

impl Symbol for Uniform {
    const ALL: &'static [Self] = &[
        Self::ModelView,
        Self::Projection,
        Self::Normal,
        Self::ModelViewProjection,
        Self::Ambient,
        Self::Diffuse,
        Self::Specular,
        Self::Emission,
        Self::Shininess,
        Self::UsesVertexColors,
        Self::LightAmbient,
        Self::LightDiffuse,
        Self::LightSpecular,
        Self::LightPosition,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::ModelView => "uModelViewMatrix",
            Self::Projection => "uProjectionMatrix",
            Self::Normal => "uNormalMatrix",
            Self::ModelViewProjection => "uModelViewProjectionMatrix",
            Self::Ambient => "uAmbient",
            Self::Diffuse => "uDiffuse",
            Self::Specular => "uSpecular",
            Self::Emission => "uEmission",
            Self::Shininess => "uShininess",
            Self::UsesVertexColors => "uUsesVertexColors",
            Self::LightAmbient => "uLightAmbient",
            Self::LightDiffuse => "uLightDiffuse",
            Self::LightSpecular => "uLightSpecular",
            Self::LightPosition => "uLightPosition",
        }
    }
}

pub const ATTRIBUTE_COUNT: usize = Attribute::ALL.len();
pub const UNIFORM_COUNT: usize = Uniform::ALL.len();

/// Location of every symbol in a vocabulary, indexed by the symbol itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SymbolTable<K, const N: usize> {
    locations: [Location; N],
    _key: PhantomData<K>,
}

pub type AttributeLocations = SymbolTable<Attribute, ATTRIBUTE_COUNT>;
pub type UniformLocations = SymbolTable<Uniform, UNIFORM_COUNT>;

impl<K: Symbol, const N: usize> SymbolTable<K, N> {
    /// A table where nothing is present.
    pub fn absent() -> Self {
        Self {
            locations: [Location::ABSENT; N],
            _key: PhantomData,
        }
    }

    #[inline]
    pub fn get(&self, key: K) -> Location {
        self.locations[key.index()]
    }

    #[inline]
    pub fn is_present(&self, key: K) -> bool {
        self.get(key).is_present()
    }

    pub(crate) fn set(&mut self, key: K, location: Location) {
        self.locations[key.index()] = location;
    }

    /// Every symbol with its location, in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Location)> + '_ {
        K::ALL.iter().map(|&k| (k, self.get(k)))
    }

    /// Only the symbols the program exposes.
    pub fn present(&self) -> impl Iterator<Item = (K, Location)> + '_ {
        self.iter().filter(|(_, l)| l.is_present())
    }

    fn resolve_with(lookup: impl Fn(&str) -> Location) -> Self {
        let mut table = Self::absent();
        for &key in K::ALL {
            let location = lookup(key.name());
            if !location.is_present() {
                log::trace!("{} not exposed by program", key.name());
            }
            table.set(key, location);
        }
        table
    }
}

/// Looks up every predefined attribute and uniform in a linked program.
///
/// Symbols the program does not use resolve to [`Location::ABSENT`]; that is
/// not an error. The only failure is a handle that is not a linked program,
/// which indicates a bug in the caller.
pub fn resolve<G: GraphicsApi>(
    gl: &G,
    program: G::Program,
) -> Result<(AttributeLocations, UniformLocations), ShaderError> {
    if !gl.is_program(program) || !gl.program_link_status(program) {
        return Err(ShaderError::InvalidProgram);
    }

    let attributes = AttributeLocations::resolve_with(|name| gl.attrib_location(program, name));
    let uniforms = UniformLocations::resolve_with(|name| gl.uniform_location(program, name));

    Ok((attributes, uniforms))
}
