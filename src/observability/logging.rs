//! Diagnostic logging on stderr.
//!
//! Build progress is logged at `info`, header fallbacks and missing
//! placeholders at `warn`, per-member parsing at `debug`/`trace`. The build
//! summary is printed by the command itself and never goes through here.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding a filter directive that replaces `-v`.
pub const LOG_LEVEL_ENV: &str = "PINCFG_BUILDER_LOG_LEVEL";

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Plain text without timestamps.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

/// Most verbose level shown for a `-v` count; warnings are always shown.
#[must_use]
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::builder()
        .with_env_var(LOG_LEVEL_ENV)
        .with_default_directive(LevelFilter::from_level(level_for(verbosity)).into())
        .from_env_lossy()
}

/// Whether human-format logs use ANSI colors.
///
/// `auto` requires a terminal on stderr and no `NO_COLOR`.
#[must_use]
pub fn ansi_enabled(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Install the global subscriber.
///
/// Module targets are shown from `-vv` on. A second call leaves the first
/// subscriber in place.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2);

    let installed = match format {
        LogFormat::Human => builder
            .with_ansi(ansi_enabled(color))
            .without_time()
            .try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_err() {
        tracing::debug!("logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(3), Level::TRACE);
        assert_eq!(level_for(u8::MAX), Level::TRACE);
    }

    #[test]
    fn test_explicit_color_choice() {
        assert!(ansi_enabled(ColorChoice::Always));
        assert!(!ansi_enabled(ColorChoice::Never));
    }

    #[test]
    fn test_second_init_is_ignored() {
        init_logging(LogFormat::Human, 0, ColorChoice::Never);
        init_logging(LogFormat::Json, 3, ColorChoice::Never);
    }
}
