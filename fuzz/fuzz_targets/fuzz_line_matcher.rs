//! Fuzz target for the dependency-line matcher and coordinate parser.
//!
//! Goal: the matcher should **never panic** on any input line. It may
//! decline to match, and the coordinate parser may return errors, but
//! panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_line_matcher
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        for line in text.lines() {
            if let Some(dep) = catalogize_domain::match_dependency_line(line) {
                let _ = catalogize_domain::Coordinate::parse(dep.notation);
            }
        }
    }
});
