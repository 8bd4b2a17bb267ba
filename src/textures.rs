//! Texture conversion hooks
//!
//! A VMAT points at `.tga`/`.png`/`.jpg` sources while the VMT textures are
//! `.vtf` files. Converting them is left to an external program.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::translator::{TextureExtension, TextureReference, TranslateError};

/// Converts one referenced texture into the configured image format.
pub trait TextureConverter {
    fn convert(
        &self,
        texture: &TextureReference,
        extension: TextureExtension,
    ) -> Result<(), TranslateError>;
}

/// Runs `program <materials_dir>/<texture>.vtf <extension>` for each texture.
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    pub program: String,
    pub materials_dir: PathBuf,
}

impl ExternalConverter {
    pub fn new(program: &str, materials_dir: &Path) -> Self {
        ExternalConverter {
            program: program.to_string(),
            materials_dir: materials_dir.to_path_buf(),
        }
    }

    /// The `.vtf` file a reference points at.
    pub fn source_path(&self, texture: &TextureReference) -> PathBuf {
        self.materials_dir.join(format!("{}.vtf", texture.path))
    }
}

impl TextureConverter for ExternalConverter {
    fn convert(
        &self,
        texture: &TextureReference,
        extension: TextureExtension,
    ) -> Result<(), TranslateError> {
        let source = self.source_path(texture);
        log::info!(
            "Converting {} to {} with {}",
            source.display(),
            extension,
            self.program
        );

        let status = Command::new(&self.program)
            .arg(&source)
            .arg(extension.as_str())
            .status()
            .map_err(|e| TranslateError::ConverterFailed(self.program.clone(), e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(TranslateError::ConverterFailed(
                self.program.clone(),
                format!("{} exited with {}", source.display(), status),
            ))
        }
    }
}

/// Convert every texture, continuing past failures. Returns the failures.
pub fn convert_all<C: TextureConverter + ?Sized>(
    converter: &C,
    textures: &[TextureReference],
    extension: TextureExtension,
) -> Vec<(TextureReference, TranslateError)> {
    let mut failures = Vec::new();
    for texture in textures {
        if let Err(err) = converter.convert(texture, extension) {
            log::warn!("{}", err);
            failures.push((texture.clone(), err));
        }
    }
    failures
}
