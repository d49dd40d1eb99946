//! DeleteDevHandler - Remove a dev and every freebie it holds.

use std::sync::Arc;

use crate::domain::foundation::{DevId, DomainError};
use crate::ports::DevRepository;

/// Command to delete a dev.
#[derive(Debug, Clone)]
pub struct DeleteDevCommand {
    pub dev_id: DevId,
}

/// Handler for deleting devs.
pub struct DeleteDevHandler {
    devs: Arc<dyn DevRepository>,
}

impl DeleteDevHandler {
    pub fn new(devs: Arc<dyn DevRepository>) -> Self {
        Self { devs }
    }

    pub async fn handle(&self, cmd: DeleteDevCommand) -> Result<(), DomainError> {
        self.devs.delete(cmd.dev_id).await?;
        tracing::info!(dev_id = %cmd.dev_id, "Dev deleted with its freebies");
        Ok(())
    }
}
