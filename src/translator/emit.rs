// VMAT Emission
// Groups translated variables into sections and renders the VMAT text

use indexmap::IndexMap;

use crate::translator::error::TranslateError;
use crate::translator::lookup_tables::{
    translate_cubemap_mode, translate_detail_mode, translate_surface_property,
};
use crate::translator::store::VariableStore;
use crate::translator::variable::{Category, Group, Variable};
use crate::translator::TargetVariant;

pub const HEADER: &str = "// THIS FILE WAS AUTOMATICALLY TRANSLATED THROUGH VMT2VMAT";
pub const ROOT_NAME: &str = "Layer0";
pub const FAULT_MARKER: &str = "// FAULT! SHADER FAILED TO TRANSLATE";
const PHYSICS_BLOCK: &str = "SystemAttributes";

/// Partition variables by group, keeping insertion order inside a group.
/// Groups come out in their declaration order.
pub fn group_variables(store: &VariableStore) -> IndexMap<Group, Vec<&Variable>> {
    let mut groups: IndexMap<Group, Vec<&Variable>> = IndexMap::new();
    for variable in store {
        groups.entry(variable.group).or_default().push(variable);
    }
    groups.sort_keys();
    groups
}

/// Render one declaration as `key "value" // comment`.
pub fn render_line(key: &str, value: &str, comment: &str) -> String {
    let mut line = key.to_string();
    if !value.is_empty() {
        line.push_str(&format!(" \"{}\"", value));
    }
    if !comment.is_empty() {
        line.push_str(&format!(" // {}", comment));
    }
    line
}

/// Render a variable, applying the per-category value translations.
fn render_variable(variable: &Variable, target: TargetVariant, indent: &str) -> String {
    match variable.category {
        Category::SurfaceProperty => {
            let value = translate_surface_property(&variable.value, target);
            format!(
                "{indent}{block}\n{indent}{{\n{indent}\t{line}\n{indent}}}\n",
                indent = indent,
                block = PHYSICS_BLOCK,
                line = render_line(&variable.key, value, &variable.comment),
            )
        }
        Category::Cubemap => format!(
            "{}{}\n",
            indent,
            render_line(
                &variable.key,
                translate_cubemap_mode(&variable.value),
                &variable.comment
            )
        ),
        Category::Detail => format!(
            "{}{}\n",
            indent,
            render_line(
                &variable.key,
                translate_detail_mode(&variable.value),
                &variable.comment
            )
        ),
        Category::Unknown
        | Category::Shader
        | Category::Specular
        | Category::Alpha
        | Category::SelfIllum
        | Category::Overlay
        | Category::ColorTexture
        | Category::AlphaTexture
        | Category::NormalTexture
        | Category::RoughnessTexture
        | Category::MetalnessTexture
        | Category::AOTexture
        | Category::CubemapTexture
        | Category::SelfIllumTexture
        | Category::DetailTexture
        | Category::Number
        | Category::Vector2
        | Category::Vector3
        | Category::Vector4 => format!(
            "{}{}\n",
            indent,
            render_line(&variable.key, &variable.value, &variable.comment)
        ),
    }
}

fn render_preamble(output: &mut String, write_header: bool) {
    if write_header {
        output.push_str(HEADER);
        output.push_str("\n\n");
    }
    output.push_str(ROOT_NAME);
    output.push_str("\n{\n");
}

/// Render the complete VMAT text for a store.
pub fn render_vmat(store: &VariableStore, target: TargetVariant, write_header: bool) -> String {
    let mut output = String::new();
    render_preamble(&mut output, write_header);

    for (index, (group, variables)) in group_variables(store).iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!("\t//---- {} ----\n", group));
        for variable in variables {
            output.push_str(&render_variable(variable, target, "\t"));
        }
    }

    output.push_str("}\n");
    output
}

/// Render the partial file left behind when a translation is aborted. Nothing
/// follows the fault marker, the root block is left open.
pub fn render_failure(error: &TranslateError, write_header: bool) -> String {
    log::error!("Translation aborted: {}", error);
    let mut output = String::new();
    render_preamble(&mut output, write_header);
    output.push_str(FAULT_MARKER);
    output.push('\n');
    output
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;
