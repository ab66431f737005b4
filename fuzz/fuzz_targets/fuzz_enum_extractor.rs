#![no_main]

use libfuzzer_sys::fuzz_target;
use pincfg_headers::enums::TYPEDEF_ENUM;
use pincfg_headers::{SENSOR_TYPES, VARIABLE_TYPES, extract_enum, render_types_block};

fuzz_target!(|data: &[u8]| {
    if let Ok(header) = std::str::from_utf8(data) {
        let (Ok(sensors), Ok(variables)) = (
            extract_enum(header, SENSOR_TYPES.tag, TYPEDEF_ENUM),
            extract_enum(header, VARIABLE_TYPES.tag, TYPEDEF_ENUM),
        ) else {
            return;
        };

        // Every rendered row must stay on one line
        let block = render_types_block(&sensors, &variables);
        let rows = block.lines().filter(|l| l.starts_with("    '")).count();
        assert_eq!(rows, sensors.len() + variables.len());
    }
});
