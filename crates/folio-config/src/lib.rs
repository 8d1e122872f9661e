//! # folio-config
//!
//! Configuration system for Folio. Reads from `folio.toml`, then applies
//! environment variable overrides and CLI flags, in that precedence order.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::FolioConfig;
pub use schema::{
    ClientConfig, ConfigWarning, DatabaseConfig, LoggingConfig, ServerConfig, WarningSeverity,
};
