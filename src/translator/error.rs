// Translator Error Handling

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TranslateError {
    // Fatal for the file being translated
    InvalidShader(String, usize), // shader name, line number
    MissingShader,

    // Line-level errors, absorbed by the main pass
    MissingValue {
        key: String,
        expected: usize,
        found: usize,
    },

    // Driver errors
    InvalidInput(String),
    ConfigError(String),
    ConverterFailed(String, String), // program, reason

    // IO errors
    IOError(String),
}

impl TranslateError {
    /// Fatal errors abort the translation of the whole file.
    pub fn is_fatal_for_file(&self) -> bool {
        matches!(
            self,
            TranslateError::InvalidShader(..) | TranslateError::MissingShader
        )
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TranslateError::InvalidShader(shader, line) => {
                write!(f, "Invalid shader '{}' on line {}", shader, line)
            }
            TranslateError::MissingShader => {
                write!(f, "No shader declaration found")
            }
            TranslateError::MissingValue {
                key,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Keyword '{}' expects {} value token(s) but found {}",
                    key, expected, found
                )
            }
            TranslateError::InvalidInput(msg) => {
                write!(f, "Invalid input: {}", msg)
            }
            TranslateError::ConfigError(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            TranslateError::ConverterFailed(program, reason) => {
                write!(f, "Texture converter '{}' failed: {}", program, reason)
            }
            TranslateError::IOError(msg) => {
                write!(f, "IO error: {}", msg)
            }
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<std::io::Error> for TranslateError {
    fn from(err: std::io::Error) -> Self {
        TranslateError::IOError(err.to_string())
    }
}

impl From<toml::de::Error> for TranslateError {
    fn from(err: toml::de::Error) -> Self {
        TranslateError::ConfigError(err.to_string())
    }
}
