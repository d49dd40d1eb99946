//! Dev entity.

use crate::domain::foundation::DevId;
use crate::domain::freebie::Freebie;
use serde::{Deserialize, Serialize};

/// A dev that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDev {
    pub name: String,
}

impl NewDev {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A stored dev with the freebies it currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dev {
    id: DevId,
    name: String,
    freebies: Vec<Freebie>,
}

impl Dev {
    /// Reconstitute a dev from persistence.
    pub fn reconstitute(id: DevId, name: String, freebies: Vec<Freebie>) -> Self {
        Self { id, name, freebies }
    }

    pub fn id(&self) -> DevId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Freebies this dev currently holds.
    pub fn freebies(&self) -> &[Freebie] {
        &self.freebies
    }

    /// True if any held freebie is called `item_name`.
    pub fn received_one(&self, item_name: &str) -> bool {
        self.freebies.iter().any(|f| f.is_item(item_name))
    }

    /// Hand `freebie` to `other` if this dev holds it.
    ///
    /// Returns `false` and leaves everything untouched when the freebie
    /// belongs to somebody else.
    pub fn give_away(&mut self, other: &Dev, freebie: &mut Freebie) -> bool {
        if !freebie.is_held_by(self.id) {
            return false;
        }
        freebie.transfer_to(other.id);
        self.freebies.retain(|f| f.id() != freebie.id());
        true
    }
}
