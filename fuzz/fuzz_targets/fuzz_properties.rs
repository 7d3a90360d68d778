//! Fuzz target for the gradle.properties registry parser.
//!
//! Goal: the parser should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_properties
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = catalogize_repo::parse_registry(text);
    }
});
