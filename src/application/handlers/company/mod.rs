//! Company command and query handlers.

mod create_company;
mod delete_company;
mod give_freebie;
mod list_company_devs;
mod oldest_company;

pub use create_company::{CreateCompanyCommand, CreateCompanyHandler};
pub use delete_company::{DeleteCompanyCommand, DeleteCompanyHandler};
pub use give_freebie::{GiveFreebieCommand, GiveFreebieHandler};
pub use list_company_devs::{ListCompanyDevsHandler, ListCompanyDevsQuery};
pub use oldest_company::OldestCompanyHandler;
