#![no_main]

use icon_elements::domain::services::escape_single_quotes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let escaped = escape_single_quotes(text);
        assert!(!escaped.contains('\n') && !escaped.contains('\r'));
        assert_eq!(escape_single_quotes(&escaped), escaped);
    }
});
