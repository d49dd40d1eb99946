//! SQLite adapters - Database implementations for repository ports.
//!
//! This module provides adapters for SQLite-backed persistence:
//! - `SqliteStore` - The shared pool, migrations and repository factories
//! - `SqliteCompanyRepository` - Companies and their derived devs
//! - `SqliteDevRepository` - Devs and their derived companies
//! - `SqliteFreebieRepository` - Freebie inserts, joins and transfers

mod company_repository;
mod dev_repository;
mod errors;
mod freebie_repository;
mod rows;
mod store;

pub use company_repository::SqliteCompanyRepository;
pub use dev_repository::SqliteDevRepository;
pub use freebie_repository::SqliteFreebieRepository;
pub use store::SqliteStore;
