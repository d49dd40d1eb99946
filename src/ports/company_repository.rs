//! Company repository port.
//!
//! Defines the contract for persisting and retrieving companies together
//! with the freebies they have given.

use crate::domain::company::{Company, NewCompany};
use crate::domain::dev::Dev;
use crate::domain::foundation::{CompanyId, DomainError};
use async_trait::async_trait;

/// Repository port for Company persistence.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Store a new company and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, company: &NewCompany) -> Result<Company, DomainError>;

    /// Find a company by its ID, with its freebies.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, DomainError>;

    /// All companies in storage order.
    async fn find_all(&self) -> Result<Vec<Company>, DomainError>;

    /// The company with the lowest founding year.
    ///
    /// Ties go to the company stored first. Returns `None` when no
    /// company exists.
    async fn find_oldest(&self) -> Result<Option<Company>, DomainError>;

    /// Devs currently holding at least one freebie from this company,
    /// each listed once, ordered by id.
    async fn find_devs(&self, id: CompanyId) -> Result<Vec<Dev>, DomainError>;

    /// Delete a company and, by cascade, every freebie it gave.
    ///
    /// # Errors
    ///
    /// - `CompanyNotFound` if the company doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: CompanyId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CompanyRepository) {}
    }
}
