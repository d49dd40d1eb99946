//! Freebie joined with the names of its holder and giver.

use serde::Serialize;
use std::fmt;

use super::Freebie;

/// A freebie together with its dev and company names, loaded in one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreebieDetails {
    pub freebie: Freebie,
    pub dev_name: String,
    pub company_name: String,
}

impl FreebieDetails {
    /// `"{dev} owns a {item} from {company}"`.
    pub fn print_details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FreebieDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} owns a {} from {}",
            self.dev_name,
            self.freebie.item_name(),
            self.company_name
        )
    }
}
