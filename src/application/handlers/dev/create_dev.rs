//! CreateDevHandler - Command handler for registering devs.

use std::sync::Arc;

use crate::domain::dev::{Dev, NewDev};
use crate::domain::foundation::DomainError;
use crate::ports::DevRepository;

/// Command to create a dev.
#[derive(Debug, Clone)]
pub struct CreateDevCommand {
    pub name: String,
}

/// Handler for creating devs.
pub struct CreateDevHandler {
    devs: Arc<dyn DevRepository>,
}

impl CreateDevHandler {
    pub fn new(devs: Arc<dyn DevRepository>) -> Self {
        Self { devs }
    }

    pub async fn handle(&self, cmd: CreateDevCommand) -> Result<Dev, DomainError> {
        let dev = self.devs.create(&NewDev::new(cmd.name)).await?;
        tracing::info!(dev_id = %dev.id(), name = dev.name(), "Dev created");
        Ok(dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;

    #[tokio::test]
    async fn creates_dev_without_freebies() {
        let fx = Fixture::new().await;

        let dev = CreateDevHandler::new(fx.devs.clone())
            .handle(CreateDevCommand {
                name: "Ada".to_string(),
            })
            .await
            .unwrap();

        let stored = fx.devs.find_by_id(dev.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Ada");
        assert!(stored.freebies().is_empty());
    }
}
