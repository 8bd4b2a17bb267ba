// Emission tests

#[cfg(test)]
mod tests {
    use crate::translator::emit::{
        group_variables, render_failure, render_line, render_vmat, FAULT_MARKER, HEADER,
    };
    use crate::translator::error::TranslateError;
    use crate::translator::store::VariableStore;
    use crate::translator::variable::{Category, Group, Variable};
    use crate::translator::TargetVariant;

    fn store_of(variables: Vec<Variable>) -> VariableStore {
        let mut store = VariableStore::new();
        for variable in variables {
            store.add(variable);
        }
        store
    }

    #[test]
    fn test_render_line_variants() {
        assert_eq!(
            render_line("TextureColor", "materials/foo.tga", "$basetexture foo"),
            "TextureColor \"materials/foo.tga\" // $basetexture foo"
        );
        assert_eq!(render_line("F_SPECULAR", "1", ""), "F_SPECULAR \"1\"");
        assert_eq!(render_line("SystemAttributes", "", ""), "SystemAttributes");
        assert_eq!(render_line("Empty", "", "note"), "Empty // note");
    }

    #[test]
    fn test_groups_sorted_by_ordinal() {
        let store = store_of(vec![
            Variable::new("TextureDetail", "materials/d.tga", Category::DetailTexture, Group::Detail),
            Variable::new("TextureColor", "materials/c.tga", Category::ColorTexture, Group::Color),
            Variable::new("shader", "vr_complex.vfx", Category::Shader, Group::Shader),
        ]);
        let groups: Vec<Group> = group_variables(&store).keys().copied().collect();
        assert_eq!(groups, vec![Group::Shader, Group::Color, Group::Detail]);

        let vmat = render_vmat(&store, TargetVariant::Hla, false);
        let shader_at = vmat.find("//---- Shader ----").unwrap();
        let color_at = vmat.find("//---- Color ----").unwrap();
        let detail_at = vmat.find("//---- Detail ----").unwrap();
        assert!(shader_at < color_at && color_at < detail_at);
    }

    #[test]
    fn test_insertion_order_within_group() {
        let store = store_of(vec![
            Variable::new("g_flDetailBlendFactor", "0.5", Category::Number, Group::Detail),
            Variable::new("TextureDetail", "materials/d.tga", Category::DetailTexture, Group::Detail),
        ]);
        let groups = group_variables(&store);
        let keys: Vec<_> = groups[&Group::Detail].iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["g_flDetailBlendFactor", "TextureDetail"]);
    }

    #[test]
    fn test_full_document() {
        let store = store_of(vec![
            Variable::new("shader", "vr_complex.vfx", Category::Shader, Group::Shader)
                .with_source("VertexLitGeneric"),
            Variable::new(
                "PhysicsSurfaceProperties",
                "metal",
                Category::SurfaceProperty,
                Group::Physics,
            )
            .with_source("$surfaceprop metal"),
            Variable::new("TextureColor", "materials/foo.tga", Category::ColorTexture, Group::Color)
                .with_source("$basetexture foo"),
        ]);

        let expected = concat!(
            "// THIS FILE WAS AUTOMATICALLY TRANSLATED THROUGH VMT2VMAT\n",
            "\n",
            "Layer0\n",
            "{\n",
            "\t//---- Shader ----\n",
            "\tshader \"vr_complex.vfx\" // VertexLitGeneric\n",
            "\n",
            "\t//---- Color ----\n",
            "\tTextureColor \"materials/foo.tga\" // $basetexture foo\n",
            "\n",
            "\t//---- Physics ----\n",
            "\tSystemAttributes\n",
            "\t{\n",
            "\t\tPhysicsSurfaceProperties \"prop.metal\" // $surfaceprop metal\n",
            "\t}\n",
            "}\n",
        );
        assert_eq!(render_vmat(&store, TargetVariant::Hla, true), expected);
    }

    #[test]
    fn test_surface_property_follows_target() {
        let store = store_of(vec![Variable::new(
            "PhysicsSurfaceProperties",
            "metal",
            Category::SurfaceProperty,
            Group::Physics,
        )]);
        let vmat = render_vmat(&store, TargetVariant::Cs2, false);
        assert!(vmat.contains("\t\tPhysicsSurfaceProperties \"metal\"\n"));

        let store = store_of(vec![Variable::new(
            "PhysicsSurfaceProperties",
            "cardboard",
            Category::SurfaceProperty,
            Group::Physics,
        )]);
        let vmat = render_vmat(&store, TargetVariant::Hla, false);
        assert!(vmat.contains("PhysicsSurfaceProperties \"Unknown\""));
    }

    #[test]
    fn test_mode_values_are_translated() {
        let store = store_of(vec![
            Variable::new("F_SPECULAR_CUBE_MAP", "env_cubemap", Category::Cubemap, Group::Roughness),
            Variable::new("F_DETAIL_TEXTURE", "0", Category::Detail, Group::Detail),
            Variable::new("F_DETAIL_TEXTURE", "9", Category::Detail, Group::Detail),
        ]);
        let vmat = render_vmat(&store, TargetVariant::Hla, false);
        assert!(vmat.contains("\tF_SPECULAR_CUBE_MAP \"1\"\n"));
        assert!(vmat.contains("\tF_DETAIL_TEXTURE \"3\"\n"));
        assert!(vmat.contains("\tF_DETAIL_TEXTURE \"Invalid\"\n"));
    }

    #[test]
    fn test_header_is_optional() {
        let vmat = render_vmat(&VariableStore::new(), TargetVariant::Hla, false);
        assert_eq!(vmat, "Layer0\n{\n}\n");
        let vmat = render_vmat(&VariableStore::new(), TargetVariant::Hla, true);
        assert!(vmat.starts_with(HEADER));
    }

    #[test]
    fn test_failure_output_ends_at_marker() {
        let error = TranslateError::InvalidShader("badshadername".to_string(), 1);
        let output = render_failure(&error, true);
        assert!(output.starts_with(HEADER));
        assert!(output.ends_with(&format!("{}\n", FAULT_MARKER)));
        assert!(!output.contains('}'));
    }
}
