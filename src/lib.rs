//! `pincfg-builder` - configuration tool page builder
//!
//! Assembles the single-file pinCfgC configuration tool from its HTML
//! template, stylesheet and script parts, with the MySensors type tables
//! and pinCfgC limits generated from the C headers.

pub mod assembler;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod sources;
