//! ListDevCompaniesHandler - Companies whose freebies a dev holds.

use std::sync::Arc;

use crate::domain::company::Company;
use crate::domain::foundation::{DevId, DomainError, ErrorCode};
use crate::ports::DevRepository;

/// Query for the companies behind a dev's freebies.
#[derive(Debug, Clone)]
pub struct ListDevCompaniesQuery {
    pub dev_id: DevId,
}

/// Handler for a dev's derived set of companies.
pub struct ListDevCompaniesHandler {
    devs: Arc<dyn DevRepository>,
}

impl ListDevCompaniesHandler {
    pub fn new(devs: Arc<dyn DevRepository>) -> Self {
        Self { devs }
    }

    pub async fn handle(&self, query: ListDevCompaniesQuery) -> Result<Vec<Company>, DomainError> {
        if self.devs.find_by_id(query.dev_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::DevNotFound,
                format!("Dev not found: {}", query.dev_id),
            ));
        }

        let companies = self.devs.find_companies(query.dev_id).await?;
        tracing::debug!(dev_id = %query.dev_id, count = companies.len(), "Listed dev companies");
        Ok(companies)
    }
}
