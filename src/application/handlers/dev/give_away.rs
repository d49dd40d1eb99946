//! GiveAwayHandler - A dev passes a freebie on to another dev.
//!
//! Only the current holder can give a freebie away. Any other request is
//! a no-op reported as `GiveAwayResult::NotOwner`.

use std::sync::Arc;

use crate::domain::dev::Dev;
use crate::domain::foundation::{DevId, DomainError, ErrorCode, FreebieId};
use crate::domain::freebie::Freebie;
use crate::ports::{DevRepository, FreebieRepository};

/// Command to transfer a freebie between devs.
#[derive(Debug, Clone)]
pub struct GiveAwayCommand {
    pub from_dev_id: DevId,
    pub to_dev_id: DevId,
    pub freebie_id: FreebieId,
}

/// Outcome of a give-away request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiveAwayResult {
    /// The freebie now belongs to the receiving dev.
    Transferred(Freebie),
    /// The giving dev did not hold the freebie; nothing changed.
    NotOwner,
}

/// Handler for giving freebies away.
pub struct GiveAwayHandler {
    devs: Arc<dyn DevRepository>,
    freebies: Arc<dyn FreebieRepository>,
}

impl GiveAwayHandler {
    pub fn new(devs: Arc<dyn DevRepository>, freebies: Arc<dyn FreebieRepository>) -> Self {
        Self { devs, freebies }
    }

    pub async fn handle(&self, cmd: GiveAwayCommand) -> Result<GiveAwayResult, DomainError> {
        let mut giver = self.load_dev(cmd.from_dev_id).await?;
        let receiver = self.load_dev(cmd.to_dev_id).await?;

        let mut freebie = self
            .freebies
            .find_by_id(cmd.freebie_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::FreebieNotFound,
                    format!("Freebie not found: {}", cmd.freebie_id),
                )
            })?;

        if !giver.give_away(&receiver, &mut freebie) {
            tracing::warn!(
                freebie_id = %cmd.freebie_id,
                from_dev_id = %cmd.from_dev_id,
                holder_dev_id = %freebie.dev_id(),
                "Give-away refused: dev does not hold freebie"
            );
            return Ok(GiveAwayResult::NotOwner);
        }

        // The holder may have changed since the freebie was read.
        let moved = self
            .freebies
            .reassign(freebie.id(), giver.id(), receiver.id())
            .await?;
        if !moved {
            tracing::warn!(
                freebie_id = %cmd.freebie_id,
                from_dev_id = %cmd.from_dev_id,
                "Give-away refused: holder changed concurrently"
            );
            return Ok(GiveAwayResult::NotOwner);
        }

        tracing::info!(
            freebie_id = %freebie.id(),
            from_dev_id = %giver.id(),
            to_dev_id = %receiver.id(),
            "Freebie given away"
        );

        Ok(GiveAwayResult::Transferred(freebie))
    }

    async fn load_dev(&self, id: DevId) -> Result<Dev, DomainError> {
        self.devs.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::DevNotFound, format!("Dev not found: {}", id))
        })
    }
}
