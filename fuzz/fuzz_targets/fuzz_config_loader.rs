#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use pincfg_builder::config::load_config_str;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml) = std::str::from_utf8(data) {
        // Any outcome is fine as long as it does not panic
        let _ = load_config_str(yaml, Path::new("pincfg-builder.yaml"));
    }
});
