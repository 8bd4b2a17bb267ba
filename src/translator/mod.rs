// VMT to VMAT Translator
// Main translation infrastructure: rule tables, the per-line pass, inference and emission

pub mod emit;
pub mod encoder;
pub mod error;
pub mod inference;
pub mod keywords;
pub mod lookup_tables;
pub mod pass;
pub mod shaders;
pub mod store;
pub mod variable;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::TranslatorConfig;

pub use error::TranslateError;
pub use store::VariableStore;
pub use variable::{Category, Group, Variable};

/// Source 2 games a material can be translated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetVariant {
    /// Half-Life: Alyx
    #[default]
    Hla,
    /// Counter-Strike 2
    Cs2,
    /// s&box
    SBox,
}

impl TargetVariant {
    /// Parse a command line value, ignoring case.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_lowercase().as_str() {
            "hla" => Some(TargetVariant::Hla),
            "cs2" => Some(TargetVariant::Cs2),
            "sbox" | "s&box" => Some(TargetVariant::SBox),
            _ => None,
        }
    }

    /// Like `from_arg`, but unrecognized values fall back to the default.
    pub fn from_arg_or_default(arg: &str) -> Self {
        Self::from_arg(arg).unwrap_or_else(|| {
            log::warn!("Unknown target '{}', using {}", arg, Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for TargetVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TargetVariant::Hla => write!(f, "hla"),
            TargetVariant::Cs2 => write!(f, "cs2"),
            TargetVariant::SBox => write!(f, "sbox"),
        }
    }
}

/// File types Source 2 accepts for texture sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureExtension {
    #[default]
    Tga,
    Png,
    #[serde(alias = "jpeg")]
    Jpg,
}

impl TextureExtension {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_lowercase().trim_start_matches('.') {
            "tga" => Some(TextureExtension::Tga),
            "png" => Some(TextureExtension::Png),
            "jpg" | "jpeg" => Some(TextureExtension::Jpg),
            _ => None,
        }
    }

    pub fn from_arg_or_default(arg: &str) -> Self {
        Self::from_arg(arg).unwrap_or_else(|| {
            log::warn!(
                "Unknown texture extension '{}', using {}",
                arg,
                Self::default()
            );
            Self::default()
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextureExtension::Tga => "tga",
            TextureExtension::Png => "png",
            TextureExtension::Jpg => "jpg",
        }
    }
}

impl fmt::Display for TextureExtension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A texture the translated material refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureReference {
    pub category: Category,
    /// Path relative to the texture root, without extension, e.g. `brick/wall01`.
    pub path: String,
}

/// The outcome of translating one VMT file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub variables: VariableStore,
    pub target: TargetVariant,
    texture_root: String,
    texture_extension: TextureExtension,
}

impl Translation {
    /// Render the VMAT text.
    pub fn to_vmat(&self, write_header: bool) -> String {
        emit::render_vmat(&self.variables, self.target, write_header)
    }

    /// Textures referenced by the VMT itself. Textures invented by inference
    /// (such as translucency masks) do not exist in the source and are left out.
    pub fn texture_references(&self) -> Vec<TextureReference> {
        let prefix = format!("{}/", self.texture_root.trim_end_matches('/'));
        let suffix = format!(".{}", self.texture_extension);

        self.variables
            .iter()
            .filter(|v| v.category.is_texture() && !v.is_inferred())
            .map(|v| {
                let path = v.value.as_str();
                let path = path.strip_prefix(prefix.as_str()).unwrap_or(path);
                let path = path.strip_suffix(suffix.as_str()).unwrap_or(path);
                TextureReference {
                    category: v.category,
                    path: path.to_string(),
                }
            })
            .collect()
    }
}

/// Translates VMT materials with a fixed configuration.
pub struct Translator {
    config: TranslatorConfig,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslatorConfig::default())
    }
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Translator { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate the lines of one VMT file.
    pub fn translate<S: AsRef<str>>(&self, lines: &[S]) -> Result<Translation, TranslateError> {
        // Phase 1: per-line translation
        let mut store = pass::run_main_pass(lines, &self.config)?;

        // Phase 2: inference over the complete store
        inference::run_inference(&mut store, self.config.target);

        Ok(Translation {
            variables: store,
            target: self.config.target,
            texture_root: self.config.texture_root.clone(),
            texture_extension: self.config.texture_extension,
        })
    }

    /// Translate VMT text and render it as VMAT.
    pub fn translate_to_vmat(&self, source: &str) -> Result<String, TranslateError> {
        let lines: Vec<&str> = source.lines().collect();
        let translation = self.translate(&lines)?;
        Ok(translation.to_vmat(self.config.write_header))
    }
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;
