#![no_main]

use icon_elements::domain::services::dedent;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let once = dedent(text);
        assert_eq!(dedent(&once), once);
    }
});
