//! Dev command and query handlers.

mod create_dev;
mod delete_dev;
mod give_away;
mod list_dev_companies;
mod received_one;

pub use create_dev::{CreateDevCommand, CreateDevHandler};
pub use delete_dev::{DeleteDevCommand, DeleteDevHandler};
pub use give_away::{GiveAwayCommand, GiveAwayHandler, GiveAwayResult};
pub use list_dev_companies::{ListDevCompaniesHandler, ListDevCompaniesQuery};
pub use received_one::{ReceivedOneHandler, ReceivedOneQuery};
