//! DeleteCompanyHandler - Remove a company and every freebie it gave.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DomainError};
use crate::ports::CompanyRepository;

/// Command to delete a company.
#[derive(Debug, Clone)]
pub struct DeleteCompanyCommand {
    pub company_id: CompanyId,
}

/// Handler for deleting companies.
pub struct DeleteCompanyHandler {
    companies: Arc<dyn CompanyRepository>,
}

impl DeleteCompanyHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn handle(&self, cmd: DeleteCompanyCommand) -> Result<(), DomainError> {
        self.companies.delete(cmd.company_id).await?;
        tracing::info!(company_id = %cmd.company_id, "Company deleted with its freebies");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn cascades_to_freebies() {
        let fx = Fixture::new().await;
        let acme = fx.company("Acme", 1990).await;
        let globex = fx.company("Globex", 1980).await;
        let ada = fx.dev("Ada").await;
        let mug = fx.freebies.create(&acme.give_freebie(&ada, "mug", 5)).await.unwrap();
        let pen = fx.freebies.create(&globex.give_freebie(&ada, "pen", 1)).await.unwrap();

        DeleteCompanyHandler::new(fx.companies.clone())
            .handle(DeleteCompanyCommand {
                company_id: acme.id(),
            })
            .await
            .unwrap();

        assert!(fx.freebies.find_by_id(mug.id()).await.unwrap().is_none());
        assert!(fx.freebies.find_by_id(pen.id()).await.unwrap().is_some());
        let ada = fx.devs.find_by_id(ada.id()).await.unwrap().unwrap();
        assert_eq!(ada.freebies(), &[pen]);
    }

    #[tokio::test]
    async fn missing_company_is_not_found() {
        let fx = Fixture::new().await;

        let err = DeleteCompanyHandler::new(fx.companies.clone())
            .handle(DeleteCompanyCommand {
                company_id: CompanyId::from_i64(1),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CompanyNotFound);
    }
}
