//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `CompanyRepository` - Companies and their derived devs
//! - `DevRepository` - Devs and their derived companies
//! - `FreebieRepository` - Freebie creation, lookup and transfer

mod company_repository;
mod dev_repository;
mod freebie_repository;

pub use company_repository::CompanyRepository;
pub use dev_repository::DevRepository;
pub use freebie_repository::FreebieRepository;
