#![no_main]

use icon_elements::{derive_names, GroupKind, NamingRules};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(file_name) = std::str::from_utf8(data) {
        let rules = NamingRules::default();
        for kind in GroupKind::ALL {
            // Errors are fine, panics are not
            if let Ok(names) = derive_names(file_name, kind.token(), &rules) {
                assert!(names.tag_name.starts_with("hi-"));
                assert!(!names.identifier.is_empty());
            }
        }
    }
});
