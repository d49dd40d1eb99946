//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `company` - Companies and the freebies they give
//! - `dev` - Developers and the freebies they hold
//! - `freebie` - The promotional items linking the two

pub mod company;
pub mod dev;
pub mod foundation;
pub mod freebie;
