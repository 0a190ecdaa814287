//! Fuzz target for CoNLL annotation parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 content to the CoNLL parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nerstat::conll::from_conll_str;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let sentences = from_conll_str(content);
    for sentence in &sentences {
        assert!(!sentence.is_empty());
        for token in sentence {
            assert!(!token.label.is_empty());
        }
    }
});
