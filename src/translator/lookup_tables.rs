// Value Lookup Tables
// Total translations applied to special values while emitting. A missing
// mapping yields a visible sentinel instead of an error.

use crate::translator::TargetVariant;

/// Written when a surface property has no equivalent.
pub const UNKNOWN: &str = "Unknown";
/// Written when a mode or derived value has no equivalent.
pub const INVALID: &str = "Invalid";

/// Surface property rows: VMT name, then HL:A, CS2 and s&box names.
const SURFACE_PROPERTIES: &[(&str, &str, &str, &str)] = &[
    ("metal", "prop.metal", "metal", "metal"),
    ("metalpanel", "prop.metal_panel", "metal_panel", "metal"),
    ("concrete", "world.concrete", "concrete", "concrete"),
    ("wood", "prop.wood", "wood", "wood"),
    ("glass", "prop.glass", "glass", "glass"),
    ("dirt", "world.dirt", "dirt", "dirt"),
    ("plastic", "prop.plastic", "plastic", "plastic"),
    ("tile", "world.tile", "tile", "tile"),
    ("flesh", "prop.flesh", "flesh", "flesh"),
];

pub fn translate_surface_property(vmt_surface_prop: &str, target: TargetVariant) -> &'static str {
    let found = SURFACE_PROPERTIES
        .iter()
        .find(|(vmt, ..)| vmt.eq_ignore_ascii_case(vmt_surface_prop));

    match found {
        Some(&(_, hla, cs2, sbox)) => match target {
            TargetVariant::Hla => hla,
            TargetVariant::Cs2 => cs2,
            TargetVariant::SBox => sbox,
        },
        None => {
            log::warn!("No surface property for \"{}\"", vmt_surface_prop);
            UNKNOWN
        }
    }
}

/// `$envmap` value to the F_SPECULAR_CUBE_MAP mode.
pub fn translate_cubemap_mode(vmt_envmap: &str) -> &'static str {
    match vmt_envmap {
        "env_cubemap" => "1", // In-game cubemap
        "0" => "0",           // None
        _ => INVALID,
    }
}

/// `$detailblendmode` value to the F_DETAIL_TEXTURE mode.
pub fn translate_detail_mode(vmt_detail_mode: &str) -> &'static str {
    match vmt_detail_mode {
        "0" => "3", // DecalModulate
        _ => INVALID,
    }
}
