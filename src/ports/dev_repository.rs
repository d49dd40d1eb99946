//! Dev repository port.

use crate::domain::company::Company;
use crate::domain::dev::{Dev, NewDev};
use crate::domain::foundation::{DevId, DomainError};
use async_trait::async_trait;

/// Repository port for Dev persistence.
#[async_trait]
pub trait DevRepository: Send + Sync {
    /// Store a new dev and return it with its assigned id.
    async fn create(&self, dev: &NewDev) -> Result<Dev, DomainError>;

    /// Find a dev by its ID, with the freebies it holds.
    async fn find_by_id(&self, id: DevId) -> Result<Option<Dev>, DomainError>;

    /// All devs in storage order.
    async fn find_all(&self) -> Result<Vec<Dev>, DomainError>;

    /// Companies whose freebies this dev holds, each listed once,
    /// ordered by id.
    async fn find_companies(&self, id: DevId) -> Result<Vec<Company>, DomainError>;

    /// Delete a dev and, by cascade, every freebie it holds.
    ///
    /// # Errors
    ///
    /// - `DevNotFound` if the dev doesn't exist
    async fn delete(&self, id: DevId) -> Result<(), DomainError>;
}
