//! Build configuration
//!
//! Describes where the page sources, optional headers and output live, and
//! how a YAML configuration file and command-line overrides combine.

pub mod loader;
pub mod schema;

pub use loader::{BuildOverrides, load_config, load_config_str};
pub use schema::{BuildConfig, BuildPaths, Placeholders};
