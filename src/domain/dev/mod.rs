//! Dev domain module.
//!
//! Developers hold freebies and can pass them on to other developers.

mod aggregate;

pub use aggregate::{Dev, NewDev};
