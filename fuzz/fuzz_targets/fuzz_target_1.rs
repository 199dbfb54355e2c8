#![no_main]
use libfuzzer_sys::fuzz_target;

use sprig_json::parse;

fuzz_target!(|data: &[u8]| {
    // The fuzzer gives us raw bytes.
    // We only care about inputs that are valid UTF-8.
    if let Ok(s) = std::str::from_utf8(data) {
        // We are looking for panics, not parse failures, so the
        // result itself is ignored.
        let _ = parse(s);
    }
});
