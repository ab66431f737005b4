//! `inspect` command handler.
//!
//! Runs header extraction only and prints the blocks that `build` would
//! splice into the page.

use serde::Serialize;

use crate::cli::args::{InspectArgs, OutputFormat};
use crate::cli::commands::resolve_config;
use crate::error::BuilderError;
use crate::sources::{self, BlockOrigin, GeneratedBlock, LimitsReport, TypesReport};

/// JSON shape of `inspect --format json`.
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    types: &'a GeneratedBlock<TypesReport>,
    limits: &'a GeneratedBlock<LimitsReport>,
}

fn origin_line<R>(block: &GeneratedBlock<R>) -> String {
    match &block.origin {
        BlockOrigin::Parsed => format!("// source: {}", block.header.display()),
        BlockOrigin::Fallback { reason } => format!("// source: fallback ({reason})"),
    }
}

/// Execute `inspect`.
///
/// # Errors
///
/// Returns an error if the configuration file is invalid or JSON
/// serialization fails. Header problems are reported as fallbacks.
pub fn run(args: &InspectArgs) -> Result<(), BuilderError> {
    let config = resolve_config(args.layout.config.as_deref(), args.layout.overrides())?;
    let paths = config.paths();

    let types = sources::generate_types(&paths.mysensors_header);
    let limits = sources::generate_limits(&paths.types_header);

    match args.format {
        OutputFormat::Human => {
            println!("{}", origin_line(&types));
            println!("{}", types.text);
            println!();
            println!("{}", origin_line(&limits));
            println!("{}", limits.text);
        }
        OutputFormat::Json => {
            let report = InspectReport {
                types: &types,
                limits: &limits,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
