//! Company domain module.
//!
//! Companies hand out freebies. The devs a company has reached are derived
//! from those freebies and are queried through the repository.

mod aggregate;

pub use aggregate::{Company, NewCompany};
