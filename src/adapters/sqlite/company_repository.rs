//! SQLite implementation of CompanyRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::errors::db_error;
use super::rows::{group_freebies, CompanyRow, DevRow, FreebieRow};
use crate::domain::company::{Company, NewCompany};
use crate::domain::dev::Dev;
use crate::domain::foundation::{CompanyId, DomainError, ErrorCode};
use crate::ports::CompanyRepository;

/// SQLite implementation of CompanyRepository.
#[derive(Clone)]
pub struct SqliteCompanyRepository {
    pool: SqlitePool,
}

impl SqliteCompanyRepository {
    /// Creates a new SqliteCompanyRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn freebies_of(&self, id: CompanyId) -> Result<Vec<FreebieRow>, DomainError> {
        sqlx::query_as(
            r#"
            SELECT id, item_name, value, dev_id, company_id
            FROM freebies
            WHERE company_id = ?
            ORDER BY id
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch company freebies", e))
    }

    async fn with_freebies(&self, row: CompanyRow) -> Result<Company, DomainError> {
        let freebies = self
            .freebies_of(row.id())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(row.into_company(freebies))
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn create(&self, company: &NewCompany) -> Result<Company, DomainError> {
        let row: CompanyRow = sqlx::query_as(
            r#"
            INSERT INTO companies (name, founding_year)
            VALUES (?, ?)
            RETURNING id, name, founding_year
            "#,
        )
        .bind(company.name.as_str())
        .bind(company.founding_year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert company", e))?;

        Ok(row.into_company(Vec::new()))
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> =
            sqlx::query_as("SELECT id, name, founding_year FROM companies WHERE id = ?")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("Failed to fetch company", e))?;

        match row {
            Some(row) => Ok(Some(self.with_freebies(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        let rows: Vec<CompanyRow> =
            sqlx::query_as("SELECT id, name, founding_year FROM companies ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| db_error("Failed to fetch companies", e))?;

        let freebie_rows: Vec<FreebieRow> = sqlx::query_as(
            "SELECT id, item_name, value, dev_id, company_id FROM freebies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch freebies", e))?;

        let mut by_company = group_freebies(freebie_rows, |f| f.company_id());
        Ok(rows
            .into_iter()
            .map(|row| {
                let freebies = by_company.remove(&row.id()).unwrap_or_default();
                row.into_company(freebies)
            })
            .collect())
    }

    async fn find_oldest(&self) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, name, founding_year
            FROM companies
            ORDER BY founding_year ASC, id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch oldest company", e))?;

        match row {
            Some(row) => Ok(Some(self.with_freebies(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_devs(&self, id: CompanyId) -> Result<Vec<Dev>, DomainError> {
        let rows: Vec<DevRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM devs
            WHERE id IN (SELECT dev_id FROM freebies WHERE company_id = ?)
            ORDER BY id
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch company devs", e))?;

        let freebie_rows: Vec<FreebieRow> = sqlx::query_as(
            r#"
            SELECT id, item_name, value, dev_id, company_id
            FROM freebies
            WHERE dev_id IN (SELECT dev_id FROM freebies WHERE company_id = ?)
            ORDER BY id
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch dev freebies", e))?;

        let mut by_dev = group_freebies(freebie_rows, |f| f.dev_id());
        Ok(rows
            .into_iter()
            .map(|row| {
                let freebies = by_dev.remove(&row.id()).unwrap_or_default();
                row.into_dev(freebies)
            })
            .collect())
    }

    async fn delete(&self, id: CompanyId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete company", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CompanyNotFound,
                format!("Company not found: {}", id),
            ));
        }

        Ok(())
    }
}
