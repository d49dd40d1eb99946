//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write through the repositories; query handlers only read.

pub mod handlers;

pub use handlers::{
    // Company handlers
    CreateCompanyCommand, CreateCompanyHandler, DeleteCompanyCommand, DeleteCompanyHandler,
    GiveFreebieCommand, GiveFreebieHandler, ListCompanyDevsHandler, ListCompanyDevsQuery,
    OldestCompanyHandler,
    // Dev handlers
    CreateDevCommand, CreateDevHandler, DeleteDevCommand, DeleteDevHandler, GiveAwayCommand,
    GiveAwayHandler, GiveAwayResult, ListDevCompaniesHandler, ListDevCompaniesQuery,
    ReceivedOneHandler, ReceivedOneQuery,
    // Freebie handlers
    GetFreebieDetailsHandler, GetFreebieDetailsQuery,
};
