//! Translator configuration
//!
//! Values come from defaults, an optional TOML file, and finally command line
//! flags, in that order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::translator::{TargetVariant, TextureExtension, TranslateError};

/// Folder texture paths are rooted in.
pub const DEFAULT_TEXTURE_ROOT: &str = "materials";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Source 2 game the VMAT is written for
    pub target: TargetVariant,
    /// Extension given to every texture path
    pub texture_extension: TextureExtension,
    /// Folder prepended to every texture path
    pub texture_root: String,
    /// Write the "automatically translated" banner at the top of each file
    pub write_header: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            target: TargetVariant::default(),
            texture_extension: TextureExtension::default(),
            texture_root: DEFAULT_TEXTURE_ROOT.to_string(),
            write_header: true,
        }
    }
}

impl TranslatorConfig {
    pub fn new(target: TargetVariant, texture_extension: TextureExtension) -> Self {
        Self {
            target,
            texture_extension,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text. Missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, TranslateError> {
        let config: TranslatorConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, TranslateError> {
        let text = fs::read_to_string(path).map_err(|e| {
            TranslateError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, TranslateError> {
        toml::to_string_pretty(self).map_err(|e| TranslateError::ConfigError(e.to_string()))
    }
}
