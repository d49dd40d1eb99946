//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - Repository implementations over a shared SQLite pool

pub mod sqlite;

pub use sqlite::{
    SqliteCompanyRepository, SqliteDevRepository, SqliteFreebieRepository, SqliteStore,
};
