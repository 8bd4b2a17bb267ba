// VMT Shader Rules
// Maps VMT shader names to the shader of each supported Source 2 target

use crate::translator::TargetVariant;

/// Translate a VMT shader name for the given target.
///
/// Matching ignores case and surrounding quotes. Several VMT shaders share one
/// Source 2 shader.
pub fn lookup_shader(vmt_shader: &str, target: TargetVariant) -> Option<&'static str> {
    let name = vmt_shader.trim().trim_matches('"').to_lowercase();

    match name.as_str() {
        // Default lit shader and the lightmapped world geometry shader
        "vertexlitgeneric" | "lightmappedgeneric" => Some(match target {
            TargetVariant::Hla => "vr_complex.vfx",
            TargetVariant::Cs2 => "complex.vfx",
            TargetVariant::SBox => "shaders/complex.shader",
        }),

        // Per-pixel two-way blend. Only HL:A has a dedicated shader, the
        // other targets reuse it.
        "worldvertextransition" => Some(match target {
            TargetVariant::Hla | TargetVariant::Cs2 | TargetVariant::SBox => {
                "vr_simple_2way_blend.vfx"
            }
        }),

        _ => None,
    }
}

/// Shader used instead of the translated one when the material is an overlay.
pub fn overlay_shader(target: TargetVariant) -> &'static str {
    match target {
        TargetVariant::Hla => "vr_static_overlay.vfx",
        TargetVariant::Cs2 => "csgo_static_overlay.vfx",
        TargetVariant::SBox => "shaders/static_overlay.shader",
    }
}
