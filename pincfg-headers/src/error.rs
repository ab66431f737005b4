//! Error types for header extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a header into generated tables.
///
/// None of these are fatal to a build: the caller replaces the affected
/// block with its static fallback and logs the error as a warning.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The header does not exist at the expected path.
    #[error("header not found: {}", path.display())]
    HeaderMissing {
        /// Path that was probed
        path: PathBuf,
    },

    /// The header exists but could not be read as UTF-8 text.
    #[error("failed to read header {}: {source}", path.display())]
    HeaderUnreadable {
        /// Path of the header
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The enum block pattern could not be compiled.
    #[error("invalid enum pattern for '{tag}': {source}")]
    Pattern {
        /// Enum tag the pattern was built for
        tag: String,
        /// Regex compilation error
        #[source]
        source: regex::Error,
    },

    /// A required enum yielded no usable entries.
    #[error("enum '{tag}' produced no entries")]
    EmptyEnum {
        /// Enum tag name (e.g. `mysensors_sensor_t`)
        tag: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_missing_display() {
        let err = ExtractError::HeaderMissing {
            path: PathBuf::from("core/MyMessage.h"),
        };
        assert_eq!(err.to_string(), "header not found: core/MyMessage.h");
    }

    #[test]
    fn test_empty_enum_display() {
        let err = ExtractError::EmptyEnum {
            tag: "mysensors_data_t".to_string(),
        };
        assert!(err.to_string().contains("mysensors_data_t"));
    }

    #[test]
    fn test_unreadable_keeps_source() {
        use std::error::Error as _;
        let err = ExtractError::HeaderUnreadable {
            path: PathBuf::from("Types.h"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("bad utf-8"));
    }
}
