//! Header reading and table generation with fallback.
//!
//! Each optional header produces one script block. Any failure while
//! reading or parsing it swaps in the static fallback for that whole block.

use std::path::{Path, PathBuf};

use pincfg_headers::enums::TYPEDEF_ENUM;
use pincfg_headers::{
    EnumExtraction, ExtractError, LimitRow, SENSOR_TYPES, VARIABLE_TYPES, collect_limits,
    extract_defines, extract_enum, fallback, render_limits_block, render_types_block,
};
use serde::Serialize;

/// Where a generated block came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum BlockOrigin {
    /// Generated from the header.
    Parsed,
    /// Static fallback; `reason` says why the header was not used.
    Fallback {
        /// Extraction error message
        reason: String,
    },
}

impl BlockOrigin {
    /// Returns `true` for fallback blocks.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Counters for the `S_TYPES`/`V_TYPES` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypesReport {
    /// Kept sensor types.
    pub sensor_types: usize,
    /// Kept variable types.
    pub variable_types: usize,
    /// Deprecated members dropped across both enums.
    pub deprecated: usize,
    /// Unrecognized body lines across both enums.
    pub skipped_lines: usize,
}

/// Details of the `PINCFG_LIMITS` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LimitsReport {
    /// `PINCFG_*` defines found in the header.
    pub defines: usize,
    /// Rows emitted, in output order.
    pub limits: Vec<LimitRow>,
}

/// A generated script block and how it was obtained.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedBlock<R> {
    /// Header the block was derived from.
    pub header: PathBuf,
    /// Parsed or fallback.
    #[serde(flatten)]
    pub origin: BlockOrigin,
    /// Extraction details; absent for fallbacks.
    pub report: Option<R>,
    /// Script text of the block.
    #[serde(skip)]
    pub text: String,
}

impl<R> GeneratedBlock<R> {
    fn fallback(header: &Path, text: &str, err: &ExtractError) -> Self {
        Self {
            header: header.to_path_buf(),
            origin: BlockOrigin::Fallback {
                reason: err.to_string(),
            },
            report: None,
            text: text.to_string(),
        }
    }
}

/// Read an optional header.
///
/// # Errors
///
/// Returns [`ExtractError::HeaderMissing`] if the path does not exist and
/// [`ExtractError::HeaderUnreadable`] if reading fails.
pub fn read_header(path: &Path) -> Result<String, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::HeaderMissing {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| ExtractError::HeaderUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract both MySensors enums, requiring each to be non-empty.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyEnum`] if either enum yields no entries.
pub fn parse_types(content: &str) -> Result<(EnumExtraction, EnumExtraction), ExtractError> {
    let sensors = extract_enum(content, SENSOR_TYPES.tag, TYPEDEF_ENUM)?;
    let variables = extract_enum(content, VARIABLE_TYPES.tag, TYPEDEF_ENUM)?;
    for ext in [&sensors, &variables] {
        if ext.is_empty() {
            return Err(ExtractError::EmptyEnum {
                tag: ext.tag.clone(),
            });
        }
    }
    Ok((sensors, variables))
}

/// Build the `S_TYPES`/`V_TYPES` block from `MyMessage.h`.
#[must_use]
pub fn generate_types(header: &Path) -> GeneratedBlock<TypesReport> {
    let parsed = read_header(header).and_then(|content| {
        tracing::info!(path = %header.display(), "parsing MySensors types");
        parse_types(&content)
    });

    match parsed {
        Ok((sensors, variables)) => {
            let report = TypesReport {
                sensor_types: sensors.len(),
                variable_types: variables.len(),
                deprecated: sensors.deprecated + variables.deprecated,
                skipped_lines: sensors.skipped_lines + variables.skipped_lines,
            };
            tracing::info!(
                sensor_types = report.sensor_types,
                variable_types = report.variable_types,
                "found MySensors types"
            );
            if report.skipped_lines > 0 {
                tracing::warn!(
                    skipped = report.skipped_lines,
                    "some enum lines were not recognized"
                );
            }
            GeneratedBlock {
                header: header.to_path_buf(),
                origin: BlockOrigin::Parsed,
                text: render_types_block(&sensors, &variables),
                report: Some(report),
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "using fallback MySensors types");
            GeneratedBlock::fallback(header, fallback::types_block(), &err)
        }
    }
}

/// Build the `PINCFG_LIMITS` block from `Types.h`.
#[must_use]
pub fn generate_limits(header: &Path) -> GeneratedBlock<LimitsReport> {
    match read_header(header) {
        Ok(content) => {
            tracing::info!(path = %header.display(), "parsing pinCfgC constraints");
            let defines = extract_defines(&content);
            let limits = collect_limits(&defines);
            tracing::info!(
                defines = defines.len(),
                limits = limits.len(),
                "found pinCfgC defines"
            );
            GeneratedBlock {
                header: header.to_path_buf(),
                origin: BlockOrigin::Parsed,
                text: render_limits_block(&limits),
                report: Some(LimitsReport {
                    defines: defines.len(),
                    limits,
                }),
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "using fallback constraints");
            GeneratedBlock::fallback(header, fallback::limits_block(), &err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MY_MESSAGE_H: &str = "\
typedef enum {
\tS_DOOR = 0, //!< Door sensor, V_TRIPPED, V_ARMED
\tS_TEMP = 6, //!< Temperature sensor, V_TEMP
} mysensors_sensor_t;

typedef enum {
\tV_TEMP = 0, //!< S_TEMP. Temperature S_TEMP, S_HEATER
\tV_HUM = 1, //!< S_HUM. Humidity
\tV_DIMMER = 3, //!< \\deprecated Same as V_PERCENTAGE
} mysensors_data_t;
";

    #[test]
    fn test_missing_header_falls_back() {
        let block = generate_types(Path::new("/nonexistent/MyMessage.h"));
        assert!(block.origin.is_fallback());
        assert_eq!(block.text, fallback::types_block());
        assert!(block.report.is_none());
    }

    #[test]
    fn test_missing_types_header_falls_back() {
        let block = generate_limits(Path::new("/nonexistent/Types.h"));
        assert!(block.origin.is_fallback());
        assert_eq!(block.text, fallback::limits_block());
    }

    #[test]
    fn test_parsed_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("MyMessage.h");
        std::fs::write(&path, MY_MESSAGE_H).unwrap();

        let block = generate_types(&path);
        assert_eq!(block.origin, BlockOrigin::Parsed);
        let report = block.report.unwrap();
        assert_eq!(report.sensor_types, 2);
        assert_eq!(report.variable_types, 2);
        assert_eq!(report.deprecated, 1);
        assert!(block.text.contains("    '6': 'S_TEMP - Temperature sensor',"));
        assert!(!block.text.contains("V_DIMMER"));
    }

    #[test]
    fn test_one_empty_enum_falls_back_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("MyMessage.h");
        let only_sensors = MY_MESSAGE_H.split("typedef enum {\n\tV_TEMP").next().unwrap();
        std::fs::write(&path, only_sensors).unwrap();

        let block = generate_types(&path);
        match &block.origin {
            BlockOrigin::Fallback { reason } => assert!(reason.contains("mysensors_data_t")),
            BlockOrigin::Parsed => panic!("expected fallback"),
        }
        assert_eq!(block.text, fallback::types_block());
    }

    #[test]
    fn test_parsed_limits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Types.h");
        std::fs::write(
            &path,
            "#define PINCFG_DEBOUNCE_MS_D 100\n#define PINCFG_AUTH_PASSWORD_LEN_D 32\n",
        )
        .unwrap();

        let block = generate_limits(&path);
        assert_eq!(block.origin, BlockOrigin::Parsed);
        let report = block.report.unwrap();
        assert_eq!(report.defines, 2);
        assert_eq!(report.limits.len(), 1);
        assert!(block.text.contains("    DEBOUNCE_MS: 100,"));
    }

    #[test]
    fn test_unreadable_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Types.h");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_header(&path).unwrap_err();
        assert!(matches!(err, ExtractError::HeaderUnreadable { .. }));
    }

    #[test]
    fn test_report_serialization() {
        let block = generate_limits(Path::new("/nonexistent/Types.h"));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["origin"], "fallback");
        assert!(json["reason"].as_str().unwrap().contains("header not found"));
        assert!(json.get("text").is_none());
    }
}
