// Main Translation Pass
// Walks the VMT lines once, translating the shader line and then every keyword

use crate::config::TranslatorConfig;
use crate::translator::encoder::{encode_value, normalize_token, ValueShape};
use crate::translator::error::TranslateError;
use crate::translator::keywords::{lookup_keyword, PassFlag};
use crate::translator::shaders::lookup_shader;
use crate::translator::store::VariableStore;
use crate::translator::variable::{Category, Group, Variable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagState {
    #[default]
    Idle,
    Armed,
    Consumed,
}

/// State carried from one line to the next during a single pass.
///
/// A flag is armed and consumed by the keyword line that owns it. A line
/// whose value fails to encode never arms its flag, so a later line with the
/// same keyword can still claim it.
#[derive(Debug, Clone, Default)]
pub struct PassContext {
    pub has_shader: bool,
    pub surface_property: FlagState,
    pub detail_mode: FlagState,
    pub line_number: usize,
}

impl PassContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn flag_state(&mut self, flag: PassFlag) -> &mut FlagState {
        match flag {
            PassFlag::SurfaceProperty => &mut self.surface_property,
            PassFlag::DetailMode => &mut self.detail_mode,
        }
    }

    pub fn arm(&mut self, flag: PassFlag) {
        let state = self.flag_state(flag);
        match *state {
            FlagState::Idle => *state = FlagState::Armed,
            FlagState::Armed => {}
            FlagState::Consumed => {
                log::warn!("{:?} was already translated, ignoring repeat", flag)
            }
        }
    }

    /// Consume `flag` for an entry of `shape`. Returns false when the flag is
    /// not armed or its category cannot carry the value.
    fn consume(&mut self, flag: PassFlag, shape: ValueShape) -> bool {
        let state = self.flag_state(flag);
        if *state == FlagState::Armed && flag.category().accepts(shape) {
            *state = FlagState::Consumed;
            true
        } else {
            false
        }
    }
}

/// Split a VMT line into normalized tokens, dropping a trailing `//` comment.
pub fn tokenize_line(line: &str) -> Vec<String> {
    line.split_whitespace()
        .take_while(|token| !token.starts_with("//"))
        .map(normalize_token)
        .collect()
}

/// Lines that carry no declaration at all.
fn is_blank_or_delimiter(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed == "{" || trimmed == "}" || trimmed.starts_with("//")
}

/// Translate the shader line. The first token is the shader name; anything
/// after it (such as an opening brace) is ignored.
pub fn translate_shader_line(
    line: &str,
    config: &TranslatorConfig,
    context: &mut PassContext,
) -> Result<Variable, TranslateError> {
    let trimmed = line.trim();
    let name = trimmed.split_whitespace().next().unwrap_or("");

    match lookup_shader(name, config.target) {
        Some(shader) => {
            context.has_shader = true;
            log::info!("Translated shader \"{}\" to \"{}\"", name, shader);
            let variable = Variable::new("shader", shader, Category::Shader, Group::Shader);
            Ok(variable.with_source(trimmed))
        }
        None => {
            log::error!("Invalid shader given: \"{}\"", name);
            Err(TranslateError::InvalidShader(
                name.trim_matches('"').to_string(),
                context.line_number,
            ))
        }
    }
}

/// Translate one keyword line. `Ok(None)` means the line is skipped.
pub fn translate_keyword_line(
    line: &str,
    config: &TranslatorConfig,
    context: &mut PassContext,
) -> Result<Option<Variable>, TranslateError> {
    let tokens = tokenize_line(line);
    let Some((key, values)) = tokens.split_first() else {
        return Ok(None);
    };

    let Some(rule) = lookup_keyword(key) else {
        return Ok(None);
    };

    let value = encode_value(
        rule.shape,
        key,
        values,
        &config.texture_root,
        config.texture_extension,
    )?;

    if let Some(flag) = rule.arms {
        context.arm(flag);
    }

    let (category, group) = match rule.arms {
        Some(flag) if context.consume(flag, rule.shape) => (flag.category(), flag.group()),
        // Consumed earlier in the pass
        Some(_) => (Category::Unknown, rule.group),
        None => (rule.category, rule.group),
    };

    let variable = Variable::new(rule.target_key, &value, category, group).with_source(line.trim());
    log::info!("Translated keyword \"{}\" to \"{}\"", line.trim(), variable);
    Ok(Some(variable))
}

/// Run the main pass over every line, producing the untouched store the
/// inference engine works on.
///
/// Fails if the first line with content is not a known shader.
pub fn run_main_pass<S: AsRef<str>>(
    lines: &[S],
    config: &TranslatorConfig,
) -> Result<VariableStore, TranslateError> {
    let mut store = VariableStore::new();
    let mut context = PassContext::new();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        context.line_number = index + 1;

        if is_blank_or_delimiter(line) {
            continue;
        }

        if !context.has_shader {
            let shader = translate_shader_line(line, config, &mut context)?;
            store.add(shader);
            continue;
        }

        match translate_keyword_line(line, config, &mut context) {
            Ok(Some(variable)) => {
                store.add(variable);
            }
            Ok(None) => {
                log::debug!("Skipping line {}: \"{}\"", context.line_number, line.trim());
            }
            Err(err) => {
                log::warn!("Skipping line {}: {}", context.line_number, err);
            }
        }
    }

    if !context.has_shader {
        log::error!("No shader declaration found");
        return Err(TranslateError::MissingShader);
    }

    Ok(store)
}

#[cfg(test)]
#[path = "pass_tests.rs"]
mod tests;
