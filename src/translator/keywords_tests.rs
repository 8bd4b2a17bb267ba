// Keyword rule table tests

#[cfg(test)]
mod tests {
    use crate::translator::encoder::ValueShape;
    use crate::translator::keywords::{known_keywords, lookup_keyword, PassFlag};
    use crate::translator::variable::{Category, Group};

    #[test]
    fn test_base_texture_rule() {
        let rule = lookup_keyword("$basetexture").unwrap();
        assert_eq!(rule.target_key, "TextureColor");
        assert_eq!(rule.shape, ValueShape::Texture);
        assert_eq!(rule.category, Category::ColorTexture);
        assert_eq!(rule.group, Group::Color);
        assert_eq!(rule.arms, None);
    }

    #[test]
    fn test_lookup_is_deterministic() {
        for key in known_keywords() {
            assert_eq!(lookup_keyword(key), lookup_keyword(key), "{}", key);
        }
    }

    #[test]
    fn test_delimiters_and_blanks_are_not_keywords() {
        assert!(lookup_keyword("").is_none());
        assert!(lookup_keyword("{").is_none());
        assert!(lookup_keyword("}").is_none());
        assert!(lookup_keyword("$nonexistentkey").is_none());
    }

    #[test]
    fn test_lookup_expects_normalized_keys() {
        assert!(lookup_keyword("$BaseTexture").is_none());
        assert!(lookup_keyword("$basetexture").is_some());
    }

    #[test]
    fn test_every_rule_shape_fits_its_category() {
        for key in known_keywords() {
            let rule = lookup_keyword(key).unwrap();
            assert!(
                rule.category.accepts(rule.shape),
                "{} has shape {:?} which {:?} does not accept",
                key,
                rule.shape,
                rule.category
            );
        }
    }

    #[test]
    fn test_arming_keywords() {
        assert_eq!(
            lookup_keyword("$surfaceprop").unwrap().arms,
            Some(PassFlag::SurfaceProperty)
        );
        assert_eq!(
            lookup_keyword("$detailblendmode").unwrap().arms,
            Some(PassFlag::DetailMode)
        );
        let armed: Vec<_> = known_keywords()
            .into_iter()
            .filter(|k| lookup_keyword(k).unwrap().arms.is_some())
            .collect();
        assert_eq!(armed, vec!["$detailblendmode", "$surfaceprop"]);
    }

    #[test]
    fn test_flag_categories_accept_their_arming_shape() {
        for key in ["$surfaceprop", "$detailblendmode"] {
            let rule = lookup_keyword(key).unwrap();
            let flag = rule.arms.unwrap();
            assert!(flag.category().accepts(rule.shape));
            assert_eq!(flag.category(), rule.category);
            assert_eq!(flag.group(), rule.group);
        }
    }

    #[test]
    fn test_normal_map_aliases() {
        assert_eq!(lookup_keyword("$bumpmap"), lookup_keyword("$normalmap"));
    }
}
