// Post-Pass Inference
// Ordered rules that add or replace variables once every line has been translated

use crate::translator::lookup_tables::INVALID;
use crate::translator::shaders::overlay_shader;
use crate::translator::store::VariableStore;
use crate::translator::variable::{Category, Group, Variable};
use crate::translator::TargetVariant;

/// A guarded store mutation. The guard is evaluated against the store as the
/// previous rules left it.
pub struct InferenceRule {
    pub name: &'static str,
    pub applies: fn(&VariableStore) -> bool,
    pub apply: fn(&mut VariableStore, TargetVariant),
}

/// The rules, in the order they run. Later rules observe what earlier ones added.
pub const INFERENCE_RULES: &[InferenceRule] = &[
    InferenceRule {
        name: "overlay-alpha",
        applies: |store| store.has(Category::Overlay),
        apply: force_translucent_overlay,
    },
    InferenceRule {
        name: "alpha-texture-from-color",
        applies: |store| store.has(Category::Alpha) && !store.has(Category::AlphaTexture),
        apply: add_alpha_texture,
    },
    InferenceRule {
        name: "specular-from-maps",
        applies: |store| {
            (store.has(Category::NormalTexture) || store.has(Category::RoughnessTexture))
                && !store.has(Category::Specular)
        },
        apply: add_specular,
    },
    InferenceRule {
        name: "self-illum-reconciliation",
        applies: |store| store.has(Category::SelfIllumTexture) != store.has(Category::SelfIllum),
        apply: reconcile_self_illum,
    },
    InferenceRule {
        name: "overlay-shader-override",
        applies: |store| store.has(Category::Shader) && store.has(Category::Overlay),
        apply: override_overlay_shader,
    },
];

/// Run every rule in order. Returns the names of the rules that fired.
pub fn run_inference(store: &mut VariableStore, target: TargetVariant) -> Vec<&'static str> {
    let mut fired = Vec::new();

    for rule in INFERENCE_RULES {
        if (rule.applies)(store) {
            log::debug!("Inference rule '{}' applies", rule.name);
            (rule.apply)(store, target);
            fired.push(rule.name);
        }
    }

    fired
}

/// Insert `suffix` between the file stem and extension of a texture path.
///
/// `materials/foo.tga` with `_trans` becomes `materials/foo_trans.tga`.
pub fn derive_texture_path(texture: &str, suffix: &str) -> String {
    let file_start = texture.rfind('/').map_or(0, |i| i + 1);
    match texture[file_start..].rfind('.') {
        Some(dot) => {
            let dot = file_start + dot;
            format!("{}{}{}", &texture[..dot], suffix, &texture[dot..])
        }
        None => format!("{}{}", texture, suffix),
    }
}

fn derive_from_color(store: &VariableStore, suffix: &str) -> String {
    match store.get(Category::ColorTexture) {
        Some(color) => derive_texture_path(&color.value, suffix),
        None => {
            log::warn!("No color texture to derive a {} texture from", suffix);
            INVALID.to_string()
        }
    }
}

// An overlay is always translucent, whatever alpha mode the VMT asked for.
fn force_translucent_overlay(store: &mut VariableStore, _target: TargetVariant) {
    while let Some(replaced) = store.remove(Category::Alpha) {
        log::info!("Replacing {} with translucency for overlay", replaced);
    }
    store.add(
        Variable::new("F_TRANSLUCENT", "1", Category::Alpha, Group::Alpha)
            .with_comment("Overlays are translucent"),
    );
}

fn add_alpha_texture(store: &mut VariableStore, _target: TargetVariant) {
    let texture = derive_from_color(store, "_trans");
    store.add(
        Variable::new("TextureTranslucency", &texture, Category::AlphaTexture, Group::Alpha)
            .with_comment("Derived from the color texture"),
    );
}

fn add_specular(store: &mut VariableStore, _target: TargetVariant) {
    store.add(
        Variable::new("F_SPECULAR", "1", Category::Specular, Group::Roughness)
            .with_comment("Material has normal or roughness information"),
    );
}

fn reconcile_self_illum(store: &mut VariableStore, _target: TargetVariant) {
    let has_texture = store.has(Category::SelfIllumTexture);
    let has_flag = store.has(Category::SelfIllum);

    if has_texture && !has_flag {
        store.add(
            Variable::new("F_SELF_ILLUM", "1", Category::SelfIllum, Group::SelfIllum)
                .with_comment("Material has a self-illumination mask"),
        );
    } else if has_flag && !has_texture {
        let texture = derive_from_color(store, "_selfillum");
        store.add(
            Variable::new(
                "TextureSelfIllumMask",
                &texture,
                Category::SelfIllumTexture,
                Group::SelfIllum,
            )
            .with_comment("Derived from the color texture"),
        );
    }
}

fn override_overlay_shader(store: &mut VariableStore, target: TargetVariant) {
    if let Some(shader) = store.get_mut(Category::Shader) {
        log::info!(
            "Overriding shader \"{}\" with overlay shader \"{}\"",
            shader.value,
            overlay_shader(target)
        );
        shader.value = overlay_shader(target).to_string();
    }
}

#[cfg(test)]
#[path = "inference_tests.rs"]
mod tests;
