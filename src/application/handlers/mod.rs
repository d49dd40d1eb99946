//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod company;
pub mod dev;
pub mod freebie;

#[cfg(test)]
pub(crate) mod test_support;

pub use company::{
    CreateCompanyCommand, CreateCompanyHandler, DeleteCompanyCommand, DeleteCompanyHandler,
    GiveFreebieCommand, GiveFreebieHandler, ListCompanyDevsHandler, ListCompanyDevsQuery,
    OldestCompanyHandler,
};
pub use dev::{
    CreateDevCommand, CreateDevHandler, DeleteDevCommand, DeleteDevHandler, GiveAwayCommand,
    GiveAwayHandler, GiveAwayResult, ListDevCompaniesHandler, ListDevCompaniesQuery,
    ReceivedOneHandler, ReceivedOneQuery,
};
pub use freebie::{GetFreebieDetailsHandler, GetFreebieDetailsQuery};
