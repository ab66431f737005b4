//! Observability module
//!
//! Structured logging for build progress, header fallbacks and summaries.

pub mod logging;

pub use logging::{LogFormat, init_logging};
