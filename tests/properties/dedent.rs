//! Property tests for rendering through a caller-owned cache.

use proptest::prelude::*;

use icon_elements::domain::services::{DedentCache, Template};

const GROUP: Template<'static> = Template::new(&["\n    <g>\n      ", "\n    </g>\n"]);

proptest! {
    /// PROPERTY: the cache never changes what a template renders to, and a
    /// repeated instance is served from it.
    #[test]
    fn property_cached_render_matches_direct_render(
        values in proptest::collection::vec("[a-z <>\n]{0,12}", 1..8),
    ) {
        let mut cache = DedentCache::with_capacity(4);

        for value in &values {
            let direct = GROUP.render(&[value.as_str()]).unwrap();
            prop_assert_eq!(cache.render(&GROUP, &[value.as_str()]).unwrap(), direct.clone());
            prop_assert_eq!(cache.render(&GROUP, &[value.as_str()]).unwrap(), direct);
        }

        prop_assert!(cache.hits() >= values.len() as u64);
        prop_assert!(cache.len() <= 4);
    }
}
