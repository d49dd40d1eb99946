//! Company entity.
//!
//! A company owns the freebies it has given out. Those freebies are loaded
//! with the company, in id order.

use crate::domain::dev::Dev;
use crate::domain::foundation::CompanyId;
use crate::domain::freebie::{Freebie, NewFreebie};
use serde::{Deserialize, Serialize};

/// A company that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub name: String,
    pub founding_year: i32,
}

impl NewCompany {
    pub fn new(name: impl Into<String>, founding_year: i32) -> Self {
        Self {
            name: name.into(),
            founding_year,
        }
    }
}

/// A stored company with the freebies it has given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    founding_year: i32,
    freebies: Vec<Freebie>,
}

impl Company {
    /// Reconstitute a company from persistence.
    pub fn reconstitute(
        id: CompanyId,
        name: String,
        founding_year: i32,
        freebies: Vec<Freebie>,
    ) -> Self {
        Self {
            id,
            name,
            founding_year,
            freebies,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> CompanyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn founding_year(&self) -> i32 {
        self.founding_year
    }

    /// Freebies this company has given, whoever holds them now.
    pub fn freebies(&self) -> &[Freebie] {
        &self.freebies
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Draft a freebie from this company to `dev`.
    ///
    /// Nothing is stored until the draft goes through a `FreebieRepository`.
    pub fn give_freebie(&self, dev: &Dev, item_name: impl Into<String>, value: i64) -> NewFreebie {
        NewFreebie::new(item_name.into(), value, dev.id(), self.id)
    }

    /// True if this company is older than `other`; ties go to the lower id.
    pub fn is_older_than(&self, other: &Company) -> bool {
        (self.founding_year, self.id) < (other.founding_year, other.id)
    }
}
