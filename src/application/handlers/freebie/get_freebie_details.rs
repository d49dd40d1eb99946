//! GetFreebieDetailsHandler - A freebie with its holder and giver.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, FreebieId};
use crate::domain::freebie::FreebieDetails;
use crate::ports::FreebieRepository;

/// Query for a freebie's details.
#[derive(Debug, Clone)]
pub struct GetFreebieDetailsQuery {
    pub freebie_id: FreebieId,
}

/// Handler for freebie details.
pub struct GetFreebieDetailsHandler {
    freebies: Arc<dyn FreebieRepository>,
}

impl GetFreebieDetailsHandler {
    pub fn new(freebies: Arc<dyn FreebieRepository>) -> Self {
        Self { freebies }
    }

    pub async fn handle(&self, query: GetFreebieDetailsQuery) -> Result<FreebieDetails, DomainError> {
        self.freebies
            .find_details(query.freebie_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::FreebieNotFound,
                    format!("Freebie not found: {}", query.freebie_id),
                )
            })
    }
}
