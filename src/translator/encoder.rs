// Value Encoder
// Renders the value tokens of a VMT line into a VMAT value string.

use crate::translator::error::TranslateError;
use crate::translator::TextureExtension;

/// How the tokens following a VMT key are turned into a VMAT value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// A texture path, rooted and given the configured extension.
    Texture,
    Text,
    Number,
    Vector2,
    /// One token written twice, `[a a]`.
    SameValueV2,
    Vector3,
}

impl ValueShape {
    /// Number of value tokens this shape consumes.
    pub fn arity(&self) -> usize {
        match self {
            ValueShape::Texture
            | ValueShape::Text
            | ValueShape::Number
            | ValueShape::SameValueV2 => 1,
            ValueShape::Vector2 => 2,
            ValueShape::Vector3 => 3,
        }
    }
}

/// Normalize one raw VMT token: quotes removed, forward slashes, lowercase.
pub fn normalize_token(token: &str) -> String {
    token.replace('"', "").replace('\\', "/").to_lowercase()
}

/// Encode `values` (the normalized tokens after the key) as a VMAT value.
pub fn encode_value(
    shape: ValueShape,
    key: &str,
    values: &[String],
    texture_root: &str,
    extension: TextureExtension,
) -> Result<String, TranslateError> {
    // VMT vectors are often written "[1 1 1]" which tokenizes with the
    // brackets glued to the first and last component, so drop empty remnants.
    let values: Vec<&str> = match shape {
        ValueShape::Vector2 | ValueShape::SameValueV2 | ValueShape::Vector3 => values
            .iter()
            .map(|v| v.trim_matches(|c: char| matches!(c, '[' | ']' | '{' | '}')))
            .filter(|v| !v.is_empty())
            .collect(),
        _ => values.iter().map(String::as_str).collect(),
    };

    if values.len() < shape.arity() {
        return Err(TranslateError::MissingValue {
            key: key.to_string(),
            expected: shape.arity(),
            found: values.len(),
        });
    }

    let encoded = match shape {
        ValueShape::Texture => {
            if texture_root.is_empty() {
                format!("{}.{}", values[0], extension)
            } else {
                format!(
                    "{}/{}.{}",
                    texture_root.trim_end_matches('/'),
                    values[0],
                    extension
                )
            }
        }
        ValueShape::Text | ValueShape::Number => values[0].to_string(),
        ValueShape::Vector2 => format!("[{} {}]", values[0], values[1]),
        ValueShape::SameValueV2 => format!("[{} {}]", values[0], values[0]),
        ValueShape::Vector3 => format!("[{} {} {}]", values[0], values[1], values[2]),
    };

    Ok(encoded)
}
