//! SQLite implementation of DevRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::errors::db_error;
use super::rows::{group_freebies, CompanyRow, DevRow, FreebieRow};
use crate::domain::company::Company;
use crate::domain::dev::{Dev, NewDev};
use crate::domain::foundation::{DevId, DomainError, ErrorCode};
use crate::ports::DevRepository;

/// SQLite implementation of DevRepository.
#[derive(Clone)]
pub struct SqliteDevRepository {
    pool: SqlitePool,
}

impl SqliteDevRepository {
    /// Creates a new SqliteDevRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DevRepository for SqliteDevRepository {
    async fn create(&self, dev: &NewDev) -> Result<Dev, DomainError> {
        let row: DevRow = sqlx::query_as("INSERT INTO devs (name) VALUES (?) RETURNING id, name")
            .bind(dev.name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to insert dev", e))?;

        Ok(row.into_dev(Vec::new()))
    }

    async fn find_by_id(&self, id: DevId) -> Result<Option<Dev>, DomainError> {
        let row: Option<DevRow> = sqlx::query_as("SELECT id, name FROM devs WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch dev", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let freebies: Vec<FreebieRow> = sqlx::query_as(
            r#"
            SELECT id, item_name, value, dev_id, company_id
            FROM freebies
            WHERE dev_id = ?
            ORDER BY id
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch dev freebies", e))?;

        Ok(Some(row.into_dev(freebies.into_iter().map(Into::into).collect())))
    }

    async fn find_all(&self) -> Result<Vec<Dev>, DomainError> {
        let rows: Vec<DevRow> = sqlx::query_as("SELECT id, name FROM devs ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch devs", e))?;

        let freebie_rows: Vec<FreebieRow> = sqlx::query_as(
            "SELECT id, item_name, value, dev_id, company_id FROM freebies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch freebies", e))?;

        let mut by_dev = group_freebies(freebie_rows, |f| f.dev_id());
        Ok(rows
            .into_iter()
            .map(|row| {
                let freebies = by_dev.remove(&row.id()).unwrap_or_default();
                row.into_dev(freebies)
            })
            .collect())
    }

    async fn find_companies(&self, id: DevId) -> Result<Vec<Company>, DomainError> {
        let rows: Vec<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, name, founding_year
            FROM companies
            WHERE id IN (SELECT company_id FROM freebies WHERE dev_id = ?)
            ORDER BY id
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch dev companies", e))?;

        let freebie_rows: Vec<FreebieRow> = sqlx::query_as(
            r#"
            SELECT id, item_name, value, dev_id, company_id
            FROM freebies
            WHERE company_id IN (SELECT company_id FROM freebies WHERE dev_id = ?)
            ORDER BY id
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch company freebies", e))?;

        let mut by_company = group_freebies(freebie_rows, |f| f.company_id());
        Ok(rows
            .into_iter()
            .map(|row| {
                let freebies = by_company.remove(&row.id()).unwrap_or_default();
                row.into_company(freebies)
            })
            .collect())
    }

    async fn delete(&self, id: DevId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM devs WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete dev", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::DevNotFound,
                format!("Dev not found: {}", id),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::SqliteStore;
    use crate::domain::company::NewCompany;
    use crate::ports::{CompanyRepository, FreebieRepository};

    #[tokio::test]
    async fn create_and_find_dev() {
        let store = SqliteStore::in_memory().await.unwrap();
        let repo = store.devs();

        let ada = repo.create(&NewDev::new("Ada")).await.unwrap();
        let found = repo.find_by_id(ada.id()).await.unwrap().unwrap();

        assert_eq!(found, ada);
    }

    #[tokio::test]
    async fn find_by_id_loads_held_freebies() {
        let store = SqliteStore::in_memory().await.unwrap();
        let acme = store
            .companies()
            .create(&NewCompany::new("Acme", 1990))
            .await
            .unwrap();
        let ada = store.devs().create(&NewDev::new("Ada")).await.unwrap();
        store
            .freebies()
            .create(&acme.give_freebie(&ada, "sticker", 1))
            .await
            .unwrap();

        let ada = store.devs().find_by_id(ada.id()).await.unwrap().unwrap();
        assert_eq!(ada.freebies().len(), 1);
        assert!(ada.received_one("sticker"));
    }

    #[tokio::test]
    async fn find_companies_lists_each_company_once() {
        let store = SqliteStore::in_memory().await.unwrap();
        let acme = store
            .companies()
            .create(&NewCompany::new("Acme", 1990))
            .await
            .unwrap();
        let globex = store
            .companies()
            .create(&NewCompany::new("Globex", 1985))
            .await
            .unwrap();
        let ada = store.devs().create(&NewDev::new("Ada")).await.unwrap();

        let freebies = store.freebies();
        freebies.create(&acme.give_freebie(&ada, "mug", 5)).await.unwrap();
        freebies.create(&acme.give_freebie(&ada, "pen", 1)).await.unwrap();
        freebies.create(&globex.give_freebie(&ada, "cap", 2)).await.unwrap();

        let companies = store.devs().find_companies(ada.id()).await.unwrap();
        let names: Vec<&str> = companies.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Acme", "Globex"]);
    }

    #[tokio::test]
    async fn find_all_returns_devs_in_storage_order() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.devs().create(&NewDev::new("Ada")).await.unwrap();
        store.devs().create(&NewDev::new("Bob")).await.unwrap();

        let devs = store.devs().find_all().await.unwrap();
        let names: Vec<&str> = devs.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Ada", "Bob"]);
    }

    #[tokio::test]
    async fn delete_missing_dev_is_not_found() {
        let store = SqliteStore::in_memory().await.unwrap();
        let err = store.devs().delete(DevId::from_i64(3)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DevNotFound);
    }
}
