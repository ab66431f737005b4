#![no_main]

use libfuzzer_sys::fuzz_target;
use pincfg_headers::{collect_limits, extract_defines, render_limits_block};

fuzz_target!(|data: &[u8]| {
    if let Ok(header) = std::str::from_utf8(data) {
        let defines = extract_defines(header);
        let limits = collect_limits(&defines);
        assert!(limits.len() <= defines.len());
        let _ = render_limits_block(&limits);
    }
});
