//! # folio-store
//!
//! Persistent storage for the portfolio: a single SQLite database holding
//! the profile, the projects, and the skills.
//!
//! The API only reads profile and project rows; they are written
//! out-of-band through [`PortfolioStore::seed`]. Skills are also appended
//! through the API with [`PortfolioStore::create_skills`].

pub mod rows;
pub mod store;

pub use store::{PortfolioStore, SeedReport};
