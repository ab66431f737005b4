//! `PINCFG_LIMITS` generation from parsed defines.

use serde::Serialize;

use crate::defines::{DEFINE_PREFIX, DefineMap, MacroValue};
use crate::tables::escape_single_quoted;

/// Suffix marking a pinCfgC default/limit constant.
pub const DEFAULT_SUFFIX: &str = "_D";

/// Constants exported to the page, in output order.
pub const LIMIT_NAMES: [&str; 24] = [
    "PINCFG_CONFIG_MAX_SZ_D",
    "PINCFG_TRIGGER_MAX_SWITCHES_D",
    "PINCFG_DEBOUNCE_MS_D",
    "PINCFG_MULTICLICK_MAX_DELAY_MS_D",
    "PINCFG_SWITCH_IMPULSE_DURATIN_MS_D",
    "PINCFG_SWITCH_FB_ON_DELAY_MS_D",
    "PINCFG_SWITCH_FB_OFF_DELAY_MS_D",
    "PINCFG_SENSOR_SAMPLING_INTV_MIN_MS_D",
    "PINCFG_SENSOR_SAMPLING_INTV_MAX_MS_D",
    "PINCFG_SENSOR_SAMPLING_INTV_MS_D",
    "PINCFG_SENSOR_REPORTING_INTV_MIN_SEC_D",
    "PINCFG_SENSOR_REPORTING_INTV_MAX_SEC_D",
    "PINCFG_SENSOR_REPORTING_INTV_SEC_D",
    "PINCFG_SENSOR_SCALE_MIN_D",
    "PINCFG_SENSOR_SCALE_MAX_D",
    "PINCFG_SENSOR_SCALE_D",
    "PINCFG_SENSOR_OFFSET_MIN_D",
    "PINCFG_SENSOR_OFFSET_MAX_D",
    "PINCFG_SENSOR_OFFSET_D",
    "PINCFG_SENSOR_PRECISION_MIN_D",
    "PINCFG_SENSOR_PRECISION_MAX_D",
    "PINCFG_SENSOR_PRECISION_D",
    "PINCFG_TIMED_SWITCH_MIN_PERIOD_MS_D",
    "PINCFG_TIMED_SWITCH_MAX_PERIOD_MS_D",
];

/// One `KEY: value` row of the limits table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitRow {
    /// Property name (`DEBOUNCE_MS` for `PINCFG_DEBOUNCE_MS_D`).
    pub key: String,
    /// Coerced macro value.
    pub value: MacroValue,
}

/// Property name for a constant: prefix and `_D` suffix removed.
#[must_use]
pub fn limit_key(name: &str) -> &str {
    let name = name.strip_prefix(DEFINE_PREFIX).unwrap_or(name);
    name.strip_suffix(DEFAULT_SUFFIX).unwrap_or(name)
}

/// Script literal for a value; strings are single-quoted.
#[must_use]
pub fn render_value(value: &MacroValue) -> String {
    match value {
        MacroValue::Str(s) => format!("'{}'", escape_single_quoted(s)),
        other => other.to_string(),
    }
}

/// Pick the allow-listed constants present in `defines`, in allow-list order.
#[must_use]
pub fn collect_limits(defines: &DefineMap) -> Vec<LimitRow> {
    LIMIT_NAMES
        .iter()
        .filter_map(|name| {
            defines.get(*name).map(|value| LimitRow {
                key: limit_key(name).to_string(),
                value: value.clone(),
            })
        })
        .collect()
}

/// Render `const PINCFG_LIMITS = { ... };` preceded by its comment.
#[must_use]
pub fn render_limits_block(rows: &[LimitRow]) -> String {
    let mut lines = vec![
        "// pinCfgC constraints and defaults - auto-generated from Types.h".to_string(),
        "const PINCFG_LIMITS = {".to_string(),
    ];
    lines.extend(
        rows.iter()
            .map(|row| format!("    {}: {},", row.key, render_value(&row.value))),
    );
    lines.push("};".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defines::extract_defines;

    #[test]
    fn test_limit_key() {
        assert_eq!(limit_key("PINCFG_DEBOUNCE_MS_D"), "DEBOUNCE_MS");
        assert_eq!(limit_key("PINCFG_SENSOR_SCALE_D"), "SENSOR_SCALE");
        assert_eq!(limit_key("PINCFG_FIXED_POINT_SCALE"), "FIXED_POINT_SCALE");
    }

    #[test]
    fn test_absent_names_omitted_in_allow_list_order() {
        let defines = extract_defines(
            "#define PINCFG_SENSOR_SCALE_D 1.0\n\
             #define PINCFG_DEBOUNCE_MS_D 100\n\
             #define PINCFG_UNLISTED_D 9\n",
        );
        let rows = collect_limits(&defines);
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["DEBOUNCE_MS", "SENSOR_SCALE"]);
    }

    #[test]
    fn test_render_limits_block() {
        let defines = extract_defines(
            "#define PINCFG_CONFIG_MAX_SZ_D 480\n\
             #define PINCFG_SENSOR_SCALE_MIN_D -1000.0\n\
             #define PINCFG_SENSOR_SCALE_D 1.0 // identity\n\
             #define PINCFG_TIMED_SWITCH_MAX_PERIOD_MS_D 600000 /* 10 min */\n",
        );
        let expected = "\
// pinCfgC constraints and defaults - auto-generated from Types.h
const PINCFG_LIMITS = {
    CONFIG_MAX_SZ: 480,
    SENSOR_SCALE_MIN: -1000.0,
    SENSOR_SCALE: 1.0,
    TIMED_SWITCH_MAX_PERIOD_MS: 600000,
};";
        assert_eq!(render_limits_block(&collect_limits(&defines)), expected);
    }

    #[test]
    fn test_string_value_quoted() {
        let rows = vec![LimitRow {
            key: "DEBOUNCE_MS".to_string(),
            value: MacroValue::Str("DEFAULT_DEBOUNCE".to_string()),
        }];
        assert!(render_limits_block(&rows).contains("    DEBOUNCE_MS: 'DEFAULT_DEBOUNCE',"));
    }

    #[test]
    fn test_no_rows() {
        assert_eq!(
            render_limits_block(&[]),
            "// pinCfgC constraints and defaults - auto-generated from Types.h\nconst PINCFG_LIMITS = {\n};"
        );
    }
}
