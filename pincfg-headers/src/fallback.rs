//! Static tables used when a header is missing or cannot be parsed.
//!
//! These are representative subsets, not complete copies of the headers.
//! A fallback always replaces the whole block for its header.

/// Sensor and variable tables used without `MyMessage.h`.
pub const FALLBACK_TYPES: &str = "// MySensors sensor types (S_TYPE) - fallback
const S_TYPES = {
    '0': 'S_DOOR - Door sensor',
    '1': 'S_MOTION - Motion sensor',
    '4': 'S_BARO - Barometer sensor',
    '6': 'S_TEMP - Temperature sensor',
    '7': 'S_HUM - Humidity sensor',
    '16': 'S_LIGHT_LEVEL - Light level sensor',
    '30': 'S_MULTIMETER - Multimeter device',
    '35': 'S_MOISTURE - Moisture sensor',
    '37': 'S_MULTIMETER - Multimeter device',
    '99': 'S_CUSTOM - Custom sensor'
};

// MySensors variable types (V_TYPE) - fallback
const V_TYPES = {
    '0': 'V_TEMP - Temperature',
    '1': 'V_HUM - Humidity',
    '2': 'V_STATUS - Binary status',
    '3': 'V_LIGHT_LEVEL - Light level',
    '6': 'V_TEMP - Temperature',
    '17': 'V_PRESSURE - Pressure',
    '23': 'V_LIGHT_LEVEL - Light level',
    '37': 'V_LEVEL - Level',
    '38': 'V_VOLTAGE - Voltage',
    '39': 'V_CURRENT - Current',
    '99': 'V_CUSTOM - Custom'
};";

/// Limits table used without `Types.h`.
pub const FALLBACK_LIMITS: &str = "// pinCfgC constraints and defaults - fallback
const PINCFG_LIMITS = {
    TRIGGER_MAX_SWITCHES: 5,
    DEBOUNCE_MS: 100,
    MULTICLICK_MAX_DELAY_MS: 500,
    SWITCH_IMPULSE_DURATIN_MS: 300,
    SWITCH_FB_ON_DELAY_MS: 1000,
    SWITCH_FB_OFF_DELAY_MS: 30000,
    SENSOR_SAMPLING_INTV_MIN_MS: 100,
    SENSOR_SAMPLING_INTV_MAX_MS: 5000,
    SENSOR_SAMPLING_INTV_MS: 1000,
    SENSOR_REPORTING_INTV_MIN_SEC: 1,
    SENSOR_REPORTING_INTV_MAX_SEC: 3600,
    SENSOR_REPORTING_INTV_SEC: 300,
    SENSOR_SCALE_MIN: -1000.0,
    SENSOR_SCALE_MAX: 1000.0,
    SENSOR_SCALE: 1.0,
    SENSOR_OFFSET_MIN: -1000.0,
    SENSOR_OFFSET_MAX: 1000.0,
    SENSOR_OFFSET: 0.0,
    SENSOR_PRECISION_MIN: 0,
    SENSOR_PRECISION_MAX: 6,
    SENSOR_PRECISION_DEFAULT: 0,
    TIMED_SWITCH_MIN_PERIOD_MS: 50,
    TIMED_SWITCH_MAX_PERIOD_MS: 600000,
};";

/// Fallback `S_TYPES`/`V_TYPES` block.
#[must_use]
pub const fn types_block() -> &'static str {
    FALLBACK_TYPES
}

/// Fallback `PINCFG_LIMITS` block.
#[must_use]
pub const fn limits_block() -> &'static str {
    FALLBACK_LIMITS
}
