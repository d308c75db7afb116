//! Property tests for the rendered module and declaration.

use proptest::prelude::*;

use icon_elements::domain::services::{escape_single_quotes, render_artifact};
use icon_elements::{derive_names, GroupKind, NamingRules};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the escaped inline content appears exactly once, on one line,
    /// between the quotes of the innerHTML assignment.
    #[test]
    fn property_inline_content_stays_inside_its_literal(
        markup in "[a-z<>/=\" '\\\\\n]{0,40}",
    ) {
        let names = derive_names("home.svg", GroupKind::Micro.token(), &NamingRules::default()).unwrap();
        let escaped = escape_single_quotes(&format!("<svg>{}</svg>", markup));
        let artifact = render_artifact(&names, &escaped).unwrap();

        let module = artifact.module_source();
        let line = format!("'{}';", escaped);
        prop_assert_eq!(module.matches(&line).count(), 1);
        prop_assert!(module.lines().any(|l| l.trim() == line));
    }

    /// PROPERTY: module and declaration spell the tag and class identically.
    #[test]
    fn property_pair_agrees_on_names(
        stem in "[a-z]{1,8}(-[a-z0-9]{1,6}){0,3}",
    ) {
        let file_name = format!("{}.svg", stem);
        let names = derive_names(&file_name, GroupKind::Outline.token(), &NamingRules::default()).unwrap();
        let artifact = render_artifact(&names, "<svg></svg>").unwrap();

        let quoted_tag = format!("\"{}\"", names.tag_name);
        prop_assert!(artifact.module_source().contains(&quoted_tag));
        let expected_decl = format!("{}: {};", quoted_tag, names.identifier);
        prop_assert!(artifact.declaration_source().contains(&expected_decl));
    }
}
