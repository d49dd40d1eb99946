//! GiveFreebieHandler - A company gives a freebie to a dev.
//!
//! The only way a freebie comes into existence.
//!
//! Both ends are looked up first, so a missing company or dev is reported
//! as `CompanyNotFound` / `DevNotFound` instead of the storage layer's
//! foreign-key failure. `ConstraintViolation` still comes through when a
//! row disappears between the lookup and the insert.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DevId, DomainError, ErrorCode};
use crate::domain::freebie::Freebie;
use crate::ports::{CompanyRepository, DevRepository, FreebieRepository};

/// Command to give a freebie.
#[derive(Debug, Clone)]
pub struct GiveFreebieCommand {
    pub company_id: CompanyId,
    pub dev_id: DevId,
    pub item_name: String,
    pub value: i64,
}

/// Handler for giving freebies.
pub struct GiveFreebieHandler {
    companies: Arc<dyn CompanyRepository>,
    devs: Arc<dyn DevRepository>,
    freebies: Arc<dyn FreebieRepository>,
}

impl GiveFreebieHandler {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        devs: Arc<dyn DevRepository>,
        freebies: Arc<dyn FreebieRepository>,
    ) -> Self {
        Self {
            companies,
            devs,
            freebies,
        }
    }

    pub async fn handle(&self, cmd: GiveFreebieCommand) -> Result<Freebie, DomainError> {
        // 1. Load both ends of the relationship
        let company = self
            .companies
            .find_by_id(cmd.company_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CompanyNotFound,
                    format!("Company not found: {}", cmd.company_id),
                )
            })?;

        let dev = self.devs.find_by_id(cmd.dev_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::DevNotFound,
                format!("Dev not found: {}", cmd.dev_id),
            )
        })?;

        // 2. Draft and persist
        let draft = company.give_freebie(&dev, cmd.item_name, cmd.value);
        let freebie = self.freebies.create(&draft).await?;

        tracing::info!(
            freebie_id = %freebie.id(),
            company_id = %company.id(),
            dev_id = %dev.id(),
            item_name = freebie.item_name(),
            "Freebie given"
        );

        Ok(freebie)
    }
}
