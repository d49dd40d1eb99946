//! SQLite implementation of FreebieRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::errors::db_error;
use super::rows::{FreebieDetailsRow, FreebieRow};
use crate::domain::foundation::{DevId, DomainError, FreebieId};
use crate::domain::freebie::{Freebie, FreebieDetails, NewFreebie};
use crate::ports::FreebieRepository;

/// SQLite implementation of FreebieRepository.
#[derive(Clone)]
pub struct SqliteFreebieRepository {
    pool: SqlitePool,
}

impl SqliteFreebieRepository {
    /// Creates a new SqliteFreebieRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FreebieRepository for SqliteFreebieRepository {
    async fn create(&self, freebie: &NewFreebie) -> Result<Freebie, DomainError> {
        let row: FreebieRow = sqlx::query_as(
            r#"
            INSERT INTO freebies (item_name, value, dev_id, company_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, item_name, value, dev_id, company_id
            "#,
        )
        .bind(freebie.item_name())
        .bind(freebie.value())
        .bind(freebie.dev_id().as_i64())
        .bind(freebie.company_id().as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert freebie", e))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: FreebieId) -> Result<Option<Freebie>, DomainError> {
        let row: Option<FreebieRow> = sqlx::query_as(
            "SELECT id, item_name, value, dev_id, company_id FROM freebies WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch freebie", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_details(&self, id: FreebieId) -> Result<Option<FreebieDetails>, DomainError> {
        let row: Option<FreebieDetailsRow> = sqlx::query_as(
            r#"
            SELECT f.id, f.item_name, f.value, f.dev_id, f.company_id,
                   d.name AS dev_name,
                   c.name AS company_name
            FROM freebies f
            JOIN devs d ON d.id = f.dev_id
            JOIN companies c ON c.id = f.company_id
            WHERE f.id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch freebie details", e))?;

        Ok(row.map(Into::into))
    }

    async fn reassign(&self, id: FreebieId, from: DevId, to: DevId) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE freebies SET dev_id = ? WHERE id = ? AND dev_id = ?")
            .bind(to.as_i64())
            .bind(id.as_i64())
            .bind(from.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to reassign freebie", e))?;

        Ok(result.rows_affected() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::SqliteStore;
    use crate::domain::company::NewCompany;
    use crate::domain::dev::NewDev;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::{CompanyRepository, DevRepository};

    #[tokio::test]
    async fn create_links_dev_and_company() {
        let store = SqliteStore::in_memory().await.unwrap();
        let acme = store
            .companies()
            .create(&NewCompany::new("Acme", 1990))
            .await
            .unwrap();
        let ada = store.devs().create(&NewDev::new("Ada")).await.unwrap();

        let mug = store
            .freebies()
            .create(&acme.give_freebie(&ada, "mug", 8))
            .await
            .unwrap();

        let found = store.freebies().find_by_id(mug.id()).await.unwrap().unwrap();
        assert_eq!(found.dev_id(), ada.id());
        assert_eq!(found.company_id(), acme.id());
        assert_eq!(found.value(), 8);
    }

    #[tokio::test]
    async fn create_rejects_missing_dev() {
        let store = SqliteStore::in_memory().await.unwrap();
        let acme = store
            .companies()
            .create(&NewCompany::new("Acme", 1990))
            .await
            .unwrap();
        let ghost = store.devs().create(&NewDev::new("Ghost")).await.unwrap();
        store.devs().delete(ghost.id()).await.unwrap();

        let err = store
            .freebies()
            .create(&acme.give_freebie(&ghost, "mug", 8))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ConstraintViolation);
        let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM freebies")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(rows, 0);
        let acme = store.companies().find_by_id(acme.id()).await.unwrap().unwrap();
        assert!(acme.freebies().is_empty());
    }

    #[tokio::test]
    async fn find_details_joins_names() {
        let store = SqliteStore::in_memory().await.unwrap();
        let acme = store
            .companies()
            .create(&NewCompany::new("Acme", 1990))
            .await
            .unwrap();
        let ada = store.devs().create(&NewDev::new("Ada")).await.unwrap();
        let mug = store
            .freebies()
            .create(&acme.give_freebie(&ada, "mug", 8))
            .await
            .unwrap();

        let details = store.freebies().find_details(mug.id()).await.unwrap().unwrap();
        assert_eq!(details.freebie, mug);
        assert_eq!(details.print_details(), "Ada owns a mug from Acme");
    }

    #[tokio::test]
    async fn reassign_only_applies_to_current_holder() {
        let store = SqliteStore::in_memory().await.unwrap();
        let acme = store
            .companies()
            .create(&NewCompany::new("Acme", 1990))
            .await
            .unwrap();
        let ada = store.devs().create(&NewDev::new("Ada")).await.unwrap();
        let bob = store.devs().create(&NewDev::new("Bob")).await.unwrap();
        let mug = store
            .freebies()
            .create(&acme.give_freebie(&ada, "mug", 8))
            .await
            .unwrap();

        let repo = store.freebies();
        assert!(!repo.reassign(mug.id(), bob.id(), ada.id()).await.unwrap());
        assert!(repo.reassign(mug.id(), ada.id(), bob.id()).await.unwrap());

        let moved = repo.find_by_id(mug.id()).await.unwrap().unwrap();
        assert_eq!(moved.dev_id(), bob.id());
        assert_eq!(moved.company_id(), acme.id());
    }
}
