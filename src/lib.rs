#[macro_use]
extern crate lazy_static;

pub mod batch;
pub mod config;
pub mod textures;
pub mod translator;

pub use config::TranslatorConfig;
pub use translator::{TargetVariant, TextureExtension, TranslateError, Translation, Translator};

/*
Shape of a translated material

VMT (input)                              VMAT (output)
"VertexLitGeneric"                       Layer0
{                                        {
    "$basetexture" "brick/wall01"            //---- Shader ----
    "$bumpmap"     "brick/wall01_n"          shader "vr_complex.vfx"
    "$surfaceprop" "concrete"                //---- Color ----
}                                            TextureColor "materials/brick/wall01.tga"
                                             //---- Normal ----
                                             TextureNormal "materials/brick/wall01_n.tga"
                                             //---- Roughness ----
                                             F_SPECULAR "1"       (inferred)
                                             //---- Physics ----
                                             SystemAttributes { PhysicsSurfaceProperties "world.concrete" }
                                         }
*/
