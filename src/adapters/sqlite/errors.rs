//! Mapping from `sqlx` failures to domain errors.

use sqlx::error::ErrorKind;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Convert a `sqlx` error into a `DomainError`.
///
/// Constraint failures reported by SQLite (foreign key, not null, unique,
/// check) become `ConstraintViolation`; everything else is a
/// `DatabaseError`.
pub(crate) fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) if !matches!(db_err.kind(), ErrorKind::Other) => {
            let mut domain_err = DomainError::new(
                ErrorCode::ConstraintViolation,
                format!("{}: {}", context, db_err.message()),
            );
            if let Some(constraint) = db_err.constraint() {
                domain_err = domain_err.with_detail("constraint", constraint);
            }
            domain_err
        }
        _ => DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, err)),
    }
}
