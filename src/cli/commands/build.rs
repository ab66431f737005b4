//! `build` command handler.
//!
//! Generates the header tables, assembles the page, writes it, and prints a
//! size summary.

use std::path::PathBuf;

use serde::Serialize;

use crate::assembler::{self, Substitution};
use crate::cli::args::{BuildArgs, OutputFormat};
use crate::cli::commands::resolve_config;
use crate::config::BuildConfig;
use crate::error::{AssembleError, BuilderError};
use crate::sources::{self, GeneratedBlock, LimitsReport, TypesReport};

/// Outcome of a successful build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    /// Written page.
    pub output: PathBuf,
    /// Template size in bytes.
    pub template_bytes: usize,
    /// Stylesheet size in bytes.
    pub stylesheet_bytes: usize,
    /// Concatenated script size in bytes.
    pub script_bytes: usize,
    /// Final page size in bytes.
    pub page_bytes: usize,
    /// `S_TYPES`/`V_TYPES` block.
    pub types: GeneratedBlock<TypesReport>,
    /// `PINCFG_LIMITS` block.
    pub limits: GeneratedBlock<LimitsReport>,
    /// Placeholder outcome.
    pub substitution: Substitution,
}

/// Execute `build`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a required input
/// cannot be read, a placeholder is missing in strict mode, or the output
/// cannot be written.
pub fn run(args: &BuildArgs, quiet: bool) -> Result<(), BuilderError> {
    let config = resolve_config(args.layout.config.as_deref(), args.overrides())?;
    let summary = build(&config)?;

    if !quiet {
        match args.format {
            OutputFormat::Human => print_summary(&summary),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        }
    }
    Ok(())
}

/// Run a complete build for `config`.
///
/// # Errors
///
/// See [`run`].
pub fn build(config: &BuildConfig) -> Result<BuildSummary, BuilderError> {
    let paths = config.paths();
    tracing::info!(
        template = %paths.template.display(),
        stylesheet = %paths.stylesheet.display(),
        scripts = paths.scripts.len(),
        output = %paths.output.display(),
        "building configuration tool"
    );

    let types = sources::generate_types(&paths.mysensors_header);
    let limits = sources::generate_limits(&paths.types_header);

    let page = assembler::assemble(&paths, &config.placeholders, &types.text, &limits.text)?;

    if config.strict {
        if let Some(token) = page.substitution.missing(&config.placeholders).first() {
            return Err(AssembleError::MissingPlaceholder {
                token: (*token).to_string(),
            }
            .into());
        }
    }

    assembler::write_page(&paths.output, &page.html)?;

    Ok(BuildSummary {
        output: paths.output,
        template_bytes: page.template_len,
        stylesheet_bytes: page.stylesheet_len,
        script_bytes: page.script.len(),
        page_bytes: page.html.len(),
        types,
        limits,
        substitution: page.substitution,
    })
}

/// Format a byte count with `,` thousands separators.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn describe<R>(block: &GeneratedBlock<R>) -> String {
    match &block.origin {
        sources::BlockOrigin::Parsed => format!("parsed from {}", block.header.display()),
        sources::BlockOrigin::Fallback { reason } => format!("fallback ({reason})"),
    }
}

#[allow(clippy::cast_precision_loss)]
fn print_summary(summary: &BuildSummary) {
    println!("Build Summary:");
    println!(
        "  Template size: {} bytes",
        group_thousands(summary.template_bytes)
    );
    println!(
        "  CSS size: {} bytes",
        group_thousands(summary.stylesheet_bytes)
    );
    println!(
        "  JavaScript size: {} bytes",
        group_thousands(summary.script_bytes)
    );
    println!(
        "  Final HTML size: {} bytes ({:.1} KB)",
        group_thousands(summary.page_bytes),
        summary.page_bytes as f64 / 1024.0
    );
    if let Some(report) = &summary.types.report {
        println!(
            "  MySensors types: {} sensor, {} variable ({})",
            report.sensor_types,
            report.variable_types,
            describe(&summary.types)
        );
    } else {
        println!("  MySensors types: {}", describe(&summary.types));
    }
    if let Some(report) = &summary.limits.report {
        println!(
            "  pinCfgC limits: {} of {} defines ({})",
            report.limits.len(),
            report.defines,
            describe(&summary.limits)
        );
    } else {
        println!("  pinCfgC limits: {}", describe(&summary.limits));
    }
    println!();
    println!(
        "Build complete! Open {} in your browser.",
        summary.output.display()
    );
}
