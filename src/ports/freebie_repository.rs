//! Freebie repository port.
//!
//! Freebies are only ever inserted from a company's draft and only ever
//! updated by moving them to another dev.

use crate::domain::foundation::{DevId, DomainError, FreebieId};
use crate::domain::freebie::{Freebie, FreebieDetails, NewFreebie};
use async_trait::async_trait;

/// Repository port for Freebie persistence.
#[async_trait]
pub trait FreebieRepository: Send + Sync {
    /// Store a drafted freebie and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation` if the dev or company doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn create(&self, freebie: &NewFreebie) -> Result<Freebie, DomainError>;

    /// Find a freebie by its ID.
    async fn find_by_id(&self, id: FreebieId) -> Result<Option<Freebie>, DomainError>;

    /// Find a freebie joined with its dev and company names.
    async fn find_details(&self, id: FreebieId) -> Result<Option<FreebieDetails>, DomainError>;

    /// Move a freebie from `from` to `to`.
    ///
    /// The write only applies while `from` still holds the freebie.
    /// Returns whether a row was changed.
    async fn reassign(&self, id: FreebieId, from: DevId, to: DevId) -> Result<bool, DomainError>;
}
