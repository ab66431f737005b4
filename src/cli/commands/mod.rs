//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod build;
pub mod completions;
pub mod inspect;
pub mod version;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::config::{BuildConfig, BuildOverrides, load_config};
use crate::error::BuilderError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), BuilderError> {
    match cli.command {
        Commands::Build(args) => build::run(&args, cli.quiet),
        Commands::Inspect(args) => inspect::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Defaults, then the optional config file, then command-line overrides.
fn resolve_config(
    file: Option<&Path>,
    overrides: BuildOverrides,
) -> Result<BuildConfig, BuilderError> {
    let mut config = match file {
        Some(path) => load_config(path)?,
        None => BuildConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}
