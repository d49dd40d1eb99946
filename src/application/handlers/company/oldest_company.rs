//! OldestCompanyHandler - Query for the company founded first.

use std::sync::Arc;

use crate::domain::company::Company;
use crate::domain::foundation::DomainError;
use crate::ports::CompanyRepository;

/// Handler for finding the oldest company.
pub struct OldestCompanyHandler {
    companies: Arc<dyn CompanyRepository>,
}

impl OldestCompanyHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    /// Returns the company with the lowest founding year, or `None` when
    /// nothing is stored. Ties go to the company stored first.
    pub async fn handle(&self) -> Result<Option<Company>, DomainError> {
        let oldest = self.companies.find_oldest().await?;
        tracing::debug!(
            company_id = oldest.as_ref().map(|c| c.id().as_i64()),
            "Oldest company looked up"
        );
        Ok(oldest)
    }
}
