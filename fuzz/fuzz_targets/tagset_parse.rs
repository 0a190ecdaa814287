//! Fuzz target for tagset definition parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 content to the tagset parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nerstat::tagset::from_tagset_str;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let tags = from_tagset_str(content);
    // Output invariant: sorted and deduplicated.
    for window in tags.windows(2) {
        assert!(window[0] < window[1]);
    }
});
