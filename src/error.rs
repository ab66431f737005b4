//! Error types for `pincfg-builder`
//!
//! Only required inputs and the output file can fail a build. Problems with
//! the optional headers are [`pincfg_headers::ExtractError`]s, which are
//! logged and replaced by fallback tables instead of surfacing here.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `pincfg-builder` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, unknown keys)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (required input missing, output not writable)
    pub const IO_ERROR: i32 = 3;

    /// Template error (placeholder missing in strict mode)
    pub const TEMPLATE_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `pincfg-builder` operations.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Configuration loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Page assembly error
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuilderError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Assemble(AssembleError::MissingPlaceholder { .. }) => ExitCode::TEMPLATE_ERROR,
            Self::Assemble(_) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors loading a build configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {}: {message}", path.display())]
    Parse {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// What is wrong with it
        message: String,
    },
}

// ============================================================================
// Assembly Errors
// ============================================================================

/// Failures while producing the page.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// A required input file is missing
    #[error("file not found: {}", path.display())]
    MissingInput {
        /// Path to the missing file
        path: PathBuf,
    },

    /// A required input file exists but could not be read
    #[error("error reading {}: {source}", path.display())]
    ReadInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The output page could not be written
    #[error("error writing {}: {source}", path.display())]
    WriteOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A placeholder token was not found in the template (strict mode only)
    #[error("placeholder '{token}' not found in template")]
    MissingPlaceholder {
        /// The token that was searched for
        token: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `pincfg-builder` operations.
pub type Result<T> = std::result::Result<T, BuilderError>;

// ============================================================================
// Tests
// ============================================================================
