//! CreateCompanyHandler - Command handler for registering companies.

use std::sync::Arc;

use crate::domain::company::{Company, NewCompany};
use crate::domain::foundation::DomainError;
use crate::ports::CompanyRepository;

/// Command to create a company.
#[derive(Debug, Clone)]
pub struct CreateCompanyCommand {
    pub name: String,
    pub founding_year: i32,
}

/// Handler for creating companies.
pub struct CreateCompanyHandler {
    companies: Arc<dyn CompanyRepository>,
}

impl CreateCompanyHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn handle(&self, cmd: CreateCompanyCommand) -> Result<Company, DomainError> {
        let company = self
            .companies
            .create(&NewCompany::new(cmd.name, cmd.founding_year))
            .await?;

        tracing::info!(
            company_id = %company.id(),
            name = company.name(),
            founding_year = company.founding_year(),
            "Company created"
        );

        Ok(company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;

    #[tokio::test]
    async fn creates_company_with_fields() {
        let fx = Fixture::new().await;
        let handler = CreateCompanyHandler::new(fx.companies.clone());

        let company = handler
            .handle(CreateCompanyCommand {
                name: "Acme".to_string(),
                founding_year: 1990,
            })
            .await
            .unwrap();

        let stored = fx.companies.find_by_id(company.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Acme");
        assert_eq!(stored.founding_year(), 1990);
    }
}
