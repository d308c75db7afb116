//! Property tests for name derivation.

use proptest::prelude::*;

use icon_elements::{derive_names, GroupKind, NamingRules};

fn icon_file_name() -> impl Strategy<Value = String> {
    // heroicons style stems plus some mixed case and separators
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_ .-]{0,24}\\.svg").unwrap()
}

fn group() -> impl Strategy<Value = GroupKind> {
    proptest::sample::select(GroupKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: derived tag names are valid custom element names.
    #[test]
    fn property_tag_name_is_valid_custom_element_name(
        file_name in icon_file_name(),
        kind in group(),
    ) {
        let names = derive_names(&file_name, kind.token(), &NamingRules::default()).unwrap();
        let tag = &names.tag_name;

        let expected_prefix = format!("hi-{}-", kind.token());
        prop_assert!(tag.starts_with(&expected_prefix));
        prop_assert!(tag.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!tag.ends_with('-'));
        prop_assert!(!tag.contains("--"));
    }

    /// PROPERTY: identifiers are ASCII identifiers wrapped in prefix and suffix.
    #[test]
    fn property_identifier_is_wrapped_identifier(
        file_name in icon_file_name(),
        kind in group(),
    ) {
        let names = derive_names(&file_name, kind.token(), &NamingRules::default()).unwrap();
        let id = &names.identifier;

        prop_assert!(id.starts_with("Heroicon"));
        prop_assert!(id.ends_with("Element"));
        prop_assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    /// PROPERTY: derivation is a pure function of its inputs.
    #[test]
    fn property_derivation_is_deterministic(
        file_name in icon_file_name(),
        kind in group(),
    ) {
        let rules = NamingRules::default();
        prop_assert_eq!(
            derive_names(&file_name, kind.token(), &rules).unwrap(),
            derive_names(&file_name, kind.token(), &rules).unwrap()
        );
    }

    /// PROPERTY: different groups never share a tag name for the same file.
    #[test]
    fn property_groups_never_share_tags(file_name in icon_file_name()) {
        let rules = NamingRules::default();
        let mut tags: Vec<String> = GroupKind::ALL
            .iter()
            .map(|k| derive_names(&file_name, k.token(), &rules).unwrap().tag_name)
            .collect();
        tags.sort();
        tags.dedup();
        prop_assert_eq!(tags.len(), GroupKind::ALL.len());
    }

    /// PROPERTY: arbitrary input never panics.
    #[test]
    fn property_derive_never_panics(file_name in any::<String>(), token in any::<String>()) {
        let _ = derive_names(&file_name, &token, &NamingRules::default());
    }
}
