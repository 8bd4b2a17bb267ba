// End-to-end translator tests

#[cfg(test)]
mod tests {
    use crate::config::TranslatorConfig;
    use crate::translator::{
        Category, TargetVariant, TextureExtension, TextureReference, TranslateError, Translator,
    };

    const BRICK_VMT: &str = r#""LightmappedGeneric"
{
	"$basetexture" "Brick\Wall01"
	"$bumpmap" "brick/wall01_normal"
	"$surfaceprop" "concrete"
	"$detail" "detail/noise_detail_01"
	"$detailscale" "4"
	"$detailblendmode" "0"
	"$detailblendfactor" ".5"
}
"#;

    #[test]
    fn test_scenario_vertexlitgeneric_base_texture() {
        let translator = Translator::new(TranslatorConfig::new(
            TargetVariant::Hla,
            TextureExtension::Tga,
        ));
        let translation = translator
            .translate(&["vertexlitgeneric", "$basetexture foo"])
            .unwrap();
        let store = &translation.variables;
        assert_eq!(store.get(Category::Shader).unwrap().value, "vr_complex.vfx");
        assert_eq!(
            store.get(Category::ColorTexture).unwrap().value,
            "materials/foo.tga"
        );
    }

    #[test]
    fn test_scenario_bad_shader() {
        let translator = Translator::default();
        let result = translator.translate(&["badshadername"]);
        assert!(matches!(result, Err(TranslateError::InvalidShader(..))));
        assert!(result.unwrap_err().is_fatal_for_file());
    }

    #[test]
    fn test_translate_is_idempotent() {
        let translator = Translator::default();
        let lines: Vec<&str> = BRICK_VMT.lines().collect();
        let first = translator.translate(&lines).unwrap();
        let second = translator.translate(&lines).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_brick_material_to_vmat() {
        let translator = Translator::default();
        let vmat = translator.translate_to_vmat(BRICK_VMT).unwrap();

        let expected = concat!(
            "// THIS FILE WAS AUTOMATICALLY TRANSLATED THROUGH VMT2VMAT\n",
            "\n",
            "Layer0\n",
            "{\n",
            "\t//---- Shader ----\n",
            "\tshader \"vr_complex.vfx\" // \"LightmappedGeneric\"\n",
            "\n",
            "\t//---- Color ----\n",
            "\tTextureColor \"materials/brick/wall01.tga\" // \"$basetexture\" \"Brick\\Wall01\"\n",
            "\n",
            "\t//---- Normal ----\n",
            "\tTextureNormal \"materials/brick/wall01_normal.tga\" // \"$bumpmap\" \"brick/wall01_normal\"\n",
            "\n",
            "\t//---- Roughness ----\n",
            "\tF_SPECULAR \"1\" // Material has normal or roughness information\n",
            "\n",
            "\t//---- Detail ----\n",
            "\tTextureDetail \"materials/detail/noise_detail_01.tga\" // \"$detail\" \"detail/noise_detail_01\"\n",
            "\tg_vDetailTexCoordScale \"[4 4]\" // \"$detailscale\" \"4\"\n",
            "\tF_DETAIL_TEXTURE \"3\" // \"$detailblendmode\" \"0\"\n",
            "\tg_flDetailBlendFactor \".5\" // \"$detailblendfactor\" \".5\"\n",
            "\n",
            "\t//---- Physics ----\n",
            "\tSystemAttributes\n",
            "\t{\n",
            "\t\tPhysicsSurfaceProperties \"world.concrete\" // \"$surfaceprop\" \"concrete\"\n",
            "\t}\n",
            "}\n",
        );
        assert_eq!(vmat, expected);
    }

    #[test]
    fn test_overlay_material_end_to_end() {
        let translator = Translator::new(TranslatorConfig::new(
            TargetVariant::Cs2,
            TextureExtension::Png,
        ));
        let source = "VertexLitGeneric\n$basetexture decals/sign\n$alphatest 1\n$decal 1\n";
        let vmat = translator.translate_to_vmat(source).unwrap();

        assert!(vmat.contains("\tshader \"csgo_static_overlay.vfx\" // VertexLitGeneric\n"));
        assert!(vmat.contains("\tF_TRANSLUCENT \"1\" // Overlays are translucent\n"));
        assert!(vmat.contains("\tTextureTranslucency \"materials/decals/sign_trans.png\""));
        assert!(!vmat.contains("F_ALPHA_TEST"));
    }

    #[test]
    fn test_texture_references_skip_inferred() {
        let translator = Translator::default();
        let translation = translator
            .translate(&[
                "vertexlitgeneric",
                "$basetexture props/crate",
                "$selfillum 1",
                "$bumpmap props/crate_n",
            ])
            .unwrap();

        assert!(translation.variables.has(Category::SelfIllumTexture));
        assert_eq!(
            translation.texture_references(),
            vec![
                TextureReference {
                    category: Category::ColorTexture,
                    path: "props/crate".to_string(),
                },
                TextureReference {
                    category: Category::NormalTexture,
                    path: "props/crate_n".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_texture_references_with_custom_root() {
        let mut config = TranslatorConfig::new(TargetVariant::SBox, TextureExtension::Jpg);
        config.texture_root = "textures/".to_string();
        let translation = Translator::new(config)
            .translate(&["vertexlitgeneric", "$basetexture foo"])
            .unwrap();
        assert_eq!(
            translation.variables.get(Category::ColorTexture).unwrap().value,
            "textures/foo.jpg"
        );
        assert_eq!(translation.texture_references()[0].path, "foo");
    }

    #[test]
    fn test_variant_and_extension_parsing() {
        assert_eq!(TargetVariant::from_arg("CS2"), Some(TargetVariant::Cs2));
        assert_eq!(TargetVariant::from_arg("s&box"), Some(TargetVariant::SBox));
        assert_eq!(TargetVariant::from_arg("quake"), None);
        assert_eq!(TargetVariant::from_arg_or_default("quake"), TargetVariant::Hla);

        assert_eq!(TextureExtension::from_arg("JPEG"), Some(TextureExtension::Jpg));
        assert_eq!(TextureExtension::from_arg(".png"), Some(TextureExtension::Png));
        assert_eq!(
            TextureExtension::from_arg_or_default("psd"),
            TextureExtension::Tga
        );
        assert_eq!(TextureExtension::Jpg.to_string(), "jpg");
    }
}
