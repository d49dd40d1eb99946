//! ReceivedOneHandler - Does a dev hold a freebie with a given name?

use std::sync::Arc;

use crate::domain::foundation::{DevId, DomainError, ErrorCode};
use crate::ports::DevRepository;

/// Query for whether a dev holds an item.
#[derive(Debug, Clone)]
pub struct ReceivedOneQuery {
    pub dev_id: DevId,
    pub item_name: String,
}

/// Handler for checking receipt of an item.
pub struct ReceivedOneHandler {
    devs: Arc<dyn DevRepository>,
}

impl ReceivedOneHandler {
    pub fn new(devs: Arc<dyn DevRepository>) -> Self {
        Self { devs }
    }

    pub async fn handle(&self, query: ReceivedOneQuery) -> Result<bool, DomainError> {
        let dev = self.devs.find_by_id(query.dev_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::DevNotFound,
                format!("Dev not found: {}", query.dev_id),
            )
        })?;

        let received = dev.received_one(&query.item_name);
        tracing::debug!(
            dev_id = %query.dev_id,
            item_name = %query.item_name,
            received,
            "Checked received item"
        );
        Ok(received)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;

    fn query(dev_id: DevId, item: &str) -> ReceivedOneQuery {
        ReceivedOneQuery {
            dev_id,
            item_name: item.to_string(),
        }
    }

    #[tokio::test]
    async fn true_only_for_held_items() {
        let fx = Fixture::new().await;
        let acme = fx.company("Acme", 1990).await;
        let ada = fx.dev("Ada").await;
        fx.freebies.create(&acme.give_freebie(&ada, "sticker", 1)).await.unwrap();
        let handler = ReceivedOneHandler::new(fx.devs.clone());

        assert!(handler.handle(query(ada.id(), "sticker")).await.unwrap());
        assert!(!handler.handle(query(ada.id(), "hoodie")).await.unwrap());
    }

    #[tokio::test]
    async fn false_after_giving_item_away() {
        let fx = Fixture::new().await;
        let acme = fx.company("Acme", 1990).await;
        let ada = fx.dev("Ada").await;
        let bob = fx.dev("Bob").await;
        let sticker = fx
            .freebies
            .create(&acme.give_freebie(&ada, "sticker", 1))
            .await
            .unwrap();
        fx.freebies.reassign(sticker.id(), ada.id(), bob.id()).await.unwrap();
        let handler = ReceivedOneHandler::new(fx.devs.clone());

        assert!(!handler.handle(query(ada.id(), "sticker")).await.unwrap());
        assert!(handler.handle(query(bob.id(), "sticker")).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_dev_is_not_found() {
        let fx = Fixture::new().await;
        let handler = ReceivedOneHandler::new(fx.devs.clone());

        let err = handler
            .handle(query(DevId::from_i64(5), "sticker"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DevNotFound);
    }
}
