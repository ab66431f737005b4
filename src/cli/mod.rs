//! Command-line interface
//!
//! Argument definitions and command handlers for `pincfg-builder`.

pub mod args;
pub mod commands;
