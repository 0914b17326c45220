//! Command-line driver for the `jsonlex` lexer.
//!
//! The binary is a thin wrapper over [`cli::parse_options`] and
//! [`commands::run`]; both are exposed here so they can be tested without
//! spawning a process.

pub mod cli;
pub mod commands;
mod logging;

pub use logging::{init_tracing, LOG_ENV};
