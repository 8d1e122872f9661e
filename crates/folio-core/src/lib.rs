//! # folio-core
//!
//! Core types for the Folio portfolio workspace: the three stored entities,
//! the terminal's output line union, and the unified error type shared by
//! the store, the API server, and the terminal client.

pub mod error;
pub mod line;
pub mod types;

pub use error::{FolioError, Result};
pub use line::Line;
pub use types::*;
