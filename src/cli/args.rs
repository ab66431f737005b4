//! CLI argument definitions
//!
//! All Clap derive structs for `pincfg-builder` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::BuildOverrides;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Builds the single-file pinCfgC configuration tool page.
#[derive(Parser, Debug)]
#[command(name = "pincfg-builder", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "PINCFG_BUILDER_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the configuration tool page.
    Build(BuildArgs),

    /// Parse the headers and show the generated tables without writing.
    Inspect(InspectArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Build / Inspect
// ============================================================================

/// Input and output locations shared by `build` and `inspect`.
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// YAML build configuration file.
    #[arg(short, long, env = "PINCFG_BUILDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing the template, stylesheet and script parts.
    #[arg(short, long, env = "PINCFG_BUILDER_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Path to MySensors `MyMessage.h`.
    #[arg(long, env = "PINCFG_BUILDER_MYSENSORS_HEADER")]
    pub mysensors_header: Option<PathBuf>,

    /// Path to pinCfgC `Types.h`.
    #[arg(long, env = "PINCFG_BUILDER_TYPES_HEADER")]
    pub types_header: Option<PathBuf>,
}

/// Arguments for `build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Source and header locations.
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Output HTML file.
    #[arg(short, long, env = "PINCFG_BUILDER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Script fragment, in order (repeatable; replaces the configured list).
    #[arg(long = "script", value_name = "FILE")]
    pub scripts: Vec<PathBuf>,

    /// Fail when a template placeholder is missing.
    #[arg(long)]
    pub strict: bool,

    /// Summary format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

impl BuildArgs {
    /// Command-line values that override the configuration file.
    #[must_use]
    pub fn overrides(&self) -> BuildOverrides {
        BuildOverrides {
            output: self.output.clone(),
            scripts: self.scripts.clone(),
            strict: self.strict,
            ..self.layout.overrides()
        }
    }
}

impl LayoutArgs {
    /// Layout values that override the configuration file.
    #[must_use]
    pub fn overrides(&self) -> BuildOverrides {
        BuildOverrides {
            source_dir: self.source_dir.clone(),
            mysensors_header: self.mysensors_header.clone(),
            types_header: self.types_header.clone(),
            ..BuildOverrides::default()
        }
    }
}

/// Arguments for `inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Source and header locations.
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["pincfg-builder", "build"]).unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert!(!args.strict);
        assert!(args.scripts.is_empty());
        assert_eq!(args.format, OutputFormat::Human);
        assert_eq!(args.overrides(), BuildOverrides::default());
    }

    #[test]
    fn test_build_overrides() {
        let cli = Cli::try_parse_from([
            "pincfg-builder",
            "build",
            "--source-dir",
            "web",
            "--output",
            "out.html",
            "--script",
            "a.js",
            "--script",
            "b.js",
            "--strict",
        ])
        .unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.source_dir, Some(PathBuf::from("web")));
        assert_eq!(overrides.output, Some(PathBuf::from("out.html")));
        assert_eq!(
            overrides.scripts,
            vec![PathBuf::from("a.js"), PathBuf::from("b.js")]
        );
        assert!(overrides.strict);
    }

    #[test]
    fn test_inspect_json() {
        let cli = Cli::try_parse_from(["pincfg-builder", "inspect", "--format", "json"]).unwrap();
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_global_verbosity() {
        let cli = Cli::try_parse_from(["pincfg-builder", "build", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["pincfg-builder", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["pincfg-builder", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_shell_rejected() {
        let cli = Cli::try_parse_from(["pincfg-builder", "completions", "tcsh"]);
        assert!(cli.is_err());
    }
}
