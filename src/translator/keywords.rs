// VMT Keyword Rules
// Static mapping from VMT keys to VMAT keys, value shapes and categories

use std::collections::HashMap;

use crate::translator::encoder::ValueShape;
use crate::translator::variable::{Category, Group};

/// Run-scoped flags a keyword can arm for the rest of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassFlag {
    /// The next text or number entry is the surface property, nested in `SystemAttributes`.
    SurfaceProperty,
    /// The next number entry is the detail blend mode.
    DetailMode,
}

impl PassFlag {
    /// Category given to the entry that consumes this flag.
    pub fn category(&self) -> Category {
        match self {
            PassFlag::SurfaceProperty => Category::SurfaceProperty,
            PassFlag::DetailMode => Category::Detail,
        }
    }

    pub fn group(&self) -> Group {
        match self {
            PassFlag::SurfaceProperty => Group::Physics,
            PassFlag::DetailMode => Group::Detail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub target_key: &'static str,
    pub shape: ValueShape,
    pub category: Category,
    pub group: Group,
    pub arms: Option<PassFlag>,
}

impl KeywordRule {
    fn new(
        target_key: &'static str,
        shape: ValueShape,
        category: Category,
        group: Group,
    ) -> Self {
        KeywordRule {
            target_key,
            shape,
            category,
            group,
            arms: None,
        }
    }

    fn arming(mut self, flag: PassFlag) -> Self {
        self.arms = Some(flag);
        self
    }
}

lazy_static! {
    static ref KEYWORD_RULES: HashMap<&'static str, KeywordRule> = {
        use Category as C;
        use Group as G;
        use ValueShape as S;

        let mut m = HashMap::new();
        // Color
        m.insert("$basetexture", KeywordRule::new("TextureColor", S::Texture, C::ColorTexture, G::Color));
        m.insert("$color", KeywordRule::new("g_vColorTint", S::Vector3, C::Vector3, G::Color));
        m.insert("$color2", KeywordRule::new("g_vColorTint", S::Vector3, C::Vector3, G::Color));
        // Normal
        m.insert("$bumpmap", KeywordRule::new("TextureNormal", S::Texture, C::NormalTexture, G::Normal));
        m.insert("$normalmap", KeywordRule::new("TextureNormal", S::Texture, C::NormalTexture, G::Normal));
        // Roughness and reflections
        m.insert("$phongexponenttexture", KeywordRule::new("TextureRoughness", S::Texture, C::RoughnessTexture, G::Roughness));
        m.insert("$phongexponent", KeywordRule::new("g_flRoughnessScaleFactor", S::Number, C::Number, G::Roughness));
        m.insert("$envmap", KeywordRule::new("F_SPECULAR_CUBE_MAP", S::Text, C::Cubemap, G::Roughness));
        // Ambient occlusion
        m.insert("$ambientocclusiontexture", KeywordRule::new("TextureAmbientOcclusion", S::Texture, C::AOTexture, G::AmbientOcclusion));
        // Physics
        m.insert(
            "$surfaceprop",
            KeywordRule::new("PhysicsSurfaceProperties", S::Text, C::SurfaceProperty, G::Physics)
                .arming(PassFlag::SurfaceProperty),
        );
        // Translucency
        m.insert("$translucent", KeywordRule::new("F_TRANSLUCENT", S::Number, C::Alpha, G::Alpha));
        m.insert("$alphatest", KeywordRule::new("F_ALPHA_TEST", S::Number, C::Alpha, G::Alpha));
        m.insert("$alpha", KeywordRule::new("g_flOpacityScale", S::Number, C::Number, G::Alpha));
        // Detail
        m.insert("$detail", KeywordRule::new("TextureDetail", S::Texture, C::DetailTexture, G::Detail));
        m.insert("$detailscale", KeywordRule::new("g_vDetailTexCoordScale", S::SameValueV2, C::Vector2, G::Detail));
        m.insert("$detailblendfactor", KeywordRule::new("g_flDetailBlendFactor", S::Number, C::Number, G::Detail));
        m.insert(
            "$detailblendmode",
            KeywordRule::new("F_DETAIL_TEXTURE", S::Number, C::Detail, G::Detail)
                .arming(PassFlag::DetailMode),
        );
        // Self-illumination
        m.insert("$selfillum", KeywordRule::new("F_SELF_ILLUM", S::Number, C::SelfIllum, G::SelfIllum));
        m.insert("$selfillummask", KeywordRule::new("TextureSelfIllumMask", S::Texture, C::SelfIllumTexture, G::SelfIllum));
        m.insert("$selfillumtint", KeywordRule::new("g_vSelfIllumTint", S::Vector3, C::Vector3, G::SelfIllum));
        // Rendering
        m.insert("$nocull", KeywordRule::new("F_RENDER_BACKFACES", S::Number, C::Number, G::Unknown));
        m.insert("$decal", KeywordRule::new("F_OVERLAY", S::Number, C::Overlay, G::Unknown));
        m
    };
}

/// Look up the rule for a normalized VMT key.
///
/// Blank keys and block delimiters are never keywords; the caller skips them.
pub fn lookup_keyword(vmt_key: &str) -> Option<KeywordRule> {
    if vmt_key.is_empty() || vmt_key == "{" || vmt_key == "}" {
        return None;
    }

    let rule = KEYWORD_RULES.get(vmt_key).copied();
    if rule.is_none() {
        log::debug!("Unknown keyword encountered: \"{}\"", vmt_key);
    }
    rule
}

/// All known VMT keys, sorted.
pub fn known_keywords() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = KEYWORD_RULES.keys().copied().collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
#[path = "keywords_tests.rs"]
mod tests;
