//! # folio-cli
//!
//! Command-line interface for Folio.
//!
//! ## Commands
//!
//! - `folio serve`: Run the portfolio API
//! - `folio shell`: Interactive terminal against the API
//! - `folio exec`: Run one terminal command and print its output
//! - `folio seed`: Load a profile, projects and skills from a TOML file
//! - `folio config`: Show the effective configuration

pub mod commands;

pub use commands::Cli;
