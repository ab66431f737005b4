//! `pincfg-headers` - table extraction from C headers
//!
//! Scans `MyMessage.h` for the MySensors sensor/variable enums and `Types.h`
//! for `PINCFG_*` macro constants, and renders them as script declarations
//! (`S_TYPES`, `V_TYPES`, `PINCFG_LIMITS`) for the configuration page.
//! Static fallback blocks cover headers that are missing or unparsable.

pub mod defines;
pub mod enums;
pub mod error;
pub mod fallback;
pub mod limits;
pub mod tables;

pub use defines::{DefineMap, MacroValue, extract_defines};
pub use enums::{EnumEntry, EnumExtraction, extract_enum};
pub use error::ExtractError;
pub use limits::{LimitRow, collect_limits, render_limits_block};
pub use tables::{SENSOR_TYPES, TableStyle, VARIABLE_TYPES, render_enum_table, render_types_block};
