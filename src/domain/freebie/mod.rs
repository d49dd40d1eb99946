//! Freebie domain module.
//!
//! A freebie is a promotional item a company gave to a developer. The
//! company reference is fixed at creation; the dev reference moves when
//! the holder gives the item away.

mod aggregate;
mod details;

pub use aggregate::{Freebie, NewFreebie};
pub use details::FreebieDetails;
