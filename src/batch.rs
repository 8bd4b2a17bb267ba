//! File and directory drivers
//!
//! Reads VMT files, runs the translator and writes the VMAT next to them.
//! Every file gets a fresh translation; nothing is shared between files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::translator::emit::render_failure;
use crate::translator::{TextureReference, TranslateError, Translator};

/// What happened to one successfully translated file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub variable_count: usize,
    pub textures: Vec<TextureReference>,
}

/// Outcome of translating a directory.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub translated: Vec<FileReport>,
    pub failed: Vec<(PathBuf, TranslateError)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.translated.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Where the VMAT for `input` goes: `explicit` if given, else the input path
/// with a `.vmat` extension.
pub fn output_path_for(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("vmat"),
    }
}

/// Whether the path names an existing `.vmt` file.
pub fn is_vmt_path(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path.is_file()
        && path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("vmt"))
            .unwrap_or(false)
}

/// Read all lines of a file.
pub fn read_lines(path: &Path) -> Result<Vec<String>, TranslateError> {
    let text = fs::read_to_string(path)
        .map_err(|e| TranslateError::IOError(format!("cannot read {}: {}", path.display(), e)))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Translate one VMT file into `output`.
///
/// If the shader cannot be translated, a partial VMAT ending in a fault marker
/// is still written and the error is returned.
pub fn translate_file(
    translator: &Translator,
    input: &Path,
    output: &Path,
) -> Result<FileReport, TranslateError> {
    if !is_vmt_path(input) {
        return Err(TranslateError::InvalidInput(format!(
            "{} is not a VMT file",
            input.display()
        )));
    }

    log::info!("Translating {} -> {}", input.display(), output.display());
    let lines = read_lines(input)?;
    let write_header = translator.config().write_header;

    match translator.translate(&lines) {
        Ok(translation) => {
            fs::write(output, translation.to_vmat(write_header)).map_err(|e| {
                TranslateError::IOError(format!("cannot write {}: {}", output.display(), e))
            })?;
            Ok(FileReport {
                input: input.to_path_buf(),
                output: output.to_path_buf(),
                variable_count: translation.variables.len(),
                textures: translation.texture_references(),
            })
        }
        Err(err) => {
            if let Err(write_err) = fs::write(output, render_failure(&err, write_header)) {
                log::error!("Cannot write {}: {}", output.display(), write_err);
            }
            Err(err)
        }
    }
}

/// All `.vmt` files below `dir`, sorted.
pub fn collect_vmt_files(dir: &Path) -> Result<Vec<PathBuf>, TranslateError> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let entry = entry?;
            let path = entry.path();
            // Symlinked directories are not followed
            if entry.file_type()?.is_dir() {
                pending.push(path);
            } else if is_vmt_path(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Translate every VMT below `dir`, writing each VMAT next to its source.
/// A failing file is recorded and the batch continues.
pub fn translate_directory(
    translator: &Translator,
    dir: &Path,
) -> Result<BatchSummary, TranslateError> {
    let mut summary = BatchSummary::default();

    for input in collect_vmt_files(dir)? {
        let output = output_path_for(&input, None);
        match translate_file(translator, &input, &output) {
            Ok(report) => summary.translated.push(report),
            Err(err) => {
                log::error!("Failed to translate {}: {}", input.display(), err);
                summary.failed.push((input, err));
            }
        }
    }

    log::info!(
        "Translated {} of {} files in {}",
        summary.translated.len(),
        summary.total(),
        dir.display()
    );
    Ok(summary)
}
