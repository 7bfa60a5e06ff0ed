//! Command line front end for synthetic lab reports.
//!
//! This crate wires configuration, logging and output formats around
//! `fakelab_engine`. The `fakelab` binary lives in `main.rs`.
//!
//! # Commands
//!
//! - `fakelab generate --report-number <N>` - Generate one report
//! - `fakelab batch --start <N> --count <K>` - Summarise many reports
//! - `fakelab panels` - List available panels

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use error::{CliError, Result};

// Re-export engine crates for integration
pub use fakelab_core;
pub use fakelab_engine;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
