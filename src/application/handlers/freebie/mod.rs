//! Freebie query handlers.

mod get_freebie_details;

pub use get_freebie_details::{GetFreebieDetailsHandler, GetFreebieDetailsQuery};
