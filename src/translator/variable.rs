// Translated VMAT variables
// A variable is one declaration destined for the output file, tagged with
// the semantic category that drives inference and the group it is written in.

use std::fmt;

use crate::translator::encoder::ValueShape;

/// One translated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The VMAT keyword, e.g. `TextureColor`. May be empty for placeholders.
    pub key: String,
    /// The VMAT value, without surrounding quotes.
    pub value: String,
    /// Written after the declaration as a `//` comment.
    pub comment: String,
    /// The VMT text this variable was translated from. Empty for inferred variables.
    pub source_text: String,
    pub category: Category,
    pub group: Group,
}

impl Variable {
    pub fn new(key: &str, value: &str, category: Category, group: Group) -> Self {
        Variable {
            key: key.to_string(),
            value: value.to_string(),
            comment: String::new(),
            source_text: String::new(),
            category,
            group,
        }
    }

    /// Attach the VMT line this variable came from, both as comment and source text.
    pub fn with_source(mut self, line: &str) -> Self {
        self.comment = line.to_string();
        self.source_text = line.to_string();
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    /// Variables created by the inference engine carry no source text.
    pub fn is_inferred(&self) -> bool {
        self.source_text.is_empty()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{} \"{}\"", self.key, self.value)
        }
    }
}

/// Output sections. Declaration order is the order groups are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Unknown,
    Shader,
    Color,
    Alpha,
    Normal,
    Roughness,
    Metalness,
    AmbientOcclusion,
    Detail,
    SelfIllum,
    Physics,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Group::Unknown => "General",
            Group::Shader => "Shader",
            Group::Color => "Color",
            Group::Alpha => "Translucency",
            Group::Normal => "Normal",
            Group::Roughness => "Roughness",
            Group::Metalness => "Metalness",
            Group::AmbientOcclusion => "Ambient Occlusion",
            Group::Detail => "Detail",
            Group::SelfIllum => "Self Illumination",
            Group::Physics => "Physics",
        };
        write!(f, "{}", name)
    }
}

/// Semantic role of a variable, independent of the group it is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Unknown,
    Shader,
    SurfaceProperty,
    /// Enables PBR specular.
    Specular,
    /// Detail blend mode.
    Detail,
    /// Cubemap reflection mode: none, in-game, or artist supplied.
    Cubemap,
    /// Alpha or translucency solver flag.
    Alpha,
    SelfIllum,
    /// Marks the material as an overlay / decal.
    Overlay,
    ColorTexture,
    AlphaTexture,
    NormalTexture,
    RoughnessTexture,
    MetalnessTexture,
    AOTexture,
    CubemapTexture,
    SelfIllumTexture,
    DetailTexture,
    Number,
    Vector2,
    Vector3,
    Vector4,
}

impl Category {
    pub fn is_texture(&self) -> bool {
        matches!(
            self,
            Category::ColorTexture
                | Category::AlphaTexture
                | Category::NormalTexture
                | Category::RoughnessTexture
                | Category::MetalnessTexture
                | Category::AOTexture
                | Category::CubemapTexture
                | Category::SelfIllumTexture
                | Category::DetailTexture
        )
    }

    /// Whether a value of the given shape may carry this category.
    pub fn accepts(&self, shape: ValueShape) -> bool {
        match self {
            Category::Unknown => true,
            Category::Shader => shape == ValueShape::Text,
            Category::SurfaceProperty | Category::Cubemap | Category::Number => {
                matches!(shape, ValueShape::Text | ValueShape::Number)
            }
            Category::Specular
            | Category::Detail
            | Category::Alpha
            | Category::SelfIllum
            | Category::Overlay => shape == ValueShape::Number,
            Category::ColorTexture
            | Category::AlphaTexture
            | Category::NormalTexture
            | Category::RoughnessTexture
            | Category::MetalnessTexture
            | Category::AOTexture
            | Category::CubemapTexture
            | Category::SelfIllumTexture
            | Category::DetailTexture => shape == ValueShape::Texture,
            Category::Vector2 => {
                matches!(shape, ValueShape::Vector2 | ValueShape::SameValueV2)
            }
            Category::Vector3 => shape == ValueShape::Vector3,
            // No VMT keyword produces four components
            Category::Vector4 => false,
        }
    }
}
