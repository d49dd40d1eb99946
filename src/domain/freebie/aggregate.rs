//! Freebie entity.

use crate::domain::foundation::{CompanyId, DevId, FreebieId};
use serde::{Deserialize, Serialize};

/// A freebie that has not been stored yet.
///
/// Only [`Company::give_freebie`](crate::domain::company::Company::give_freebie)
/// builds one, so every stored freebie starts life as a gift from a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFreebie {
    item_name: String,
    value: i64,
    dev_id: DevId,
    company_id: CompanyId,
}

impl NewFreebie {
    pub(crate) fn new(item_name: String, value: i64, dev_id: DevId, company_id: CompanyId) -> Self {
        Self {
            item_name,
            value,
            dev_id,
            company_id,
        }
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn dev_id(&self) -> DevId {
        self.dev_id
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }
}

/// A stored freebie.
///
/// # Invariants
///
/// - `dev_id` and `company_id` always point at existing rows
/// - `company_id` never changes after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freebie {
    id: FreebieId,
    item_name: String,
    value: i64,
    dev_id: DevId,
    company_id: CompanyId,
}

impl Freebie {
    /// Reconstitute a freebie from persistence.
    pub fn reconstitute(
        id: FreebieId,
        item_name: String,
        value: i64,
        dev_id: DevId,
        company_id: CompanyId,
    ) -> Self {
        Self {
            id,
            item_name,
            value,
            dev_id,
            company_id,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> FreebieId {
        self.id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// The dev currently holding this freebie.
    pub fn dev_id(&self) -> DevId {
        self.dev_id
    }

    /// The company that originally gave this freebie.
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given dev currently holds this freebie.
    pub fn is_held_by(&self, dev_id: DevId) -> bool {
        self.dev_id == dev_id
    }

    /// Exact, case-sensitive item name match.
    pub fn is_item(&self, item_name: &str) -> bool {
        self.item_name == item_name
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn transfer_to(&mut self, dev_id: DevId) {
        self.dev_id = dev_id;
    }
}
