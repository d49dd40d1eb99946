//! ListCompanyDevsHandler - Devs reached by a company's freebies.

use std::sync::Arc;

use crate::domain::dev::Dev;
use crate::domain::foundation::{CompanyId, DomainError, ErrorCode};
use crate::ports::CompanyRepository;

/// Query for the devs holding a company's freebies.
#[derive(Debug, Clone)]
pub struct ListCompanyDevsQuery {
    pub company_id: CompanyId,
}

/// Handler for a company's derived set of devs.
pub struct ListCompanyDevsHandler {
    companies: Arc<dyn CompanyRepository>,
}

impl ListCompanyDevsHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn handle(&self, query: ListCompanyDevsQuery) -> Result<Vec<Dev>, DomainError> {
        if self.companies.find_by_id(query.company_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::CompanyNotFound,
                format!("Company not found: {}", query.company_id),
            ));
        }

        let devs = self.companies.find_devs(query.company_id).await?;
        tracing::debug!(company_id = %query.company_id, count = devs.len(), "Listed company devs");
        Ok(devs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;

    #[tokio::test]
    async fn lists_current_holders_once() {
        let fx = Fixture::new().await;
        let acme = fx.company("Acme", 1990).await;
        let ada = fx.dev("Ada").await;
        fx.dev("Bob").await;
        fx.freebies.create(&acme.give_freebie(&ada, "mug", 5)).await.unwrap();
        fx.freebies.create(&acme.give_freebie(&ada, "cap", 3)).await.unwrap();

        let devs = ListCompanyDevsHandler::new(fx.companies.clone())
            .handle(ListCompanyDevsQuery {
                company_id: acme.id(),
            })
            .await
            .unwrap();

        assert_eq!(devs.len(), 1);
        assert_eq!(devs[0].id(), ada.id());
    }

    #[tokio::test]
    async fn unknown_company_is_not_found() {
        let fx = Fixture::new().await;

        let err = ListCompanyDevsHandler::new(fx.companies.clone())
            .handle(ListCompanyDevsQuery {
                company_id: CompanyId::from_i64(9),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CompanyNotFound);
    }
}
