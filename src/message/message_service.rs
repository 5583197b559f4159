use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    message::{message_models::Message, message_repository::MessageStore},
    user::user_service::UserService,
};

/// Send eligibility and the three inbox/outbox views.
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
    user_service: UserService,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>, user_service: UserService) -> Self {
        Self {
            store,
            user_service,
        }
    }

    /// Checks run in a fixed order and the first failure wins: self-send,
    /// then unknown sender, then unknown receiver.
    pub async fn send(&self, sender_id: Uuid, receiver_id: Uuid, content: &str) -> Result<Message> {
        if sender_id == receiver_id {
            return Err(AppError::SelfMessage);
        }
        self.ensure_sender(sender_id).await?;
        self.ensure_receiver(receiver_id).await?;

        let sender = self.user_service.resolve(sender_id).await?;
        let receiver = self.user_service.resolve(receiver_id).await?;

        let message = self.store.save(&Message::new(&sender, &receiver, content)).await?;
        tracing::info!(
            message_id = %message.id,
            sender_id = %message.sender_id,
            receiver_id = %message.receiver_id,
            "A new message is saved"
        );
        Ok(message)
    }

    pub async fn list_received(&self, user_id: Uuid) -> Result<Vec<Message>> {
        self.ensure_receiver(user_id).await?;
        self.store.find_by_receiver(user_id).await
    }

    pub async fn list_sent(&self, user_id: Uuid) -> Result<Vec<Message>> {
        self.ensure_sender(user_id).await?;
        self.store.find_by_sender(user_id).await
    }

    /// Messages `sender_id` sent to `receiver_id`. The sender is validated first.
    pub async fn list_received_from(&self, receiver_id: Uuid, sender_id: Uuid) -> Result<Vec<Message>> {
        self.ensure_sender(sender_id).await?;
        self.ensure_receiver(receiver_id).await?;
        self.store
            .find_by_receiver_and_sender(receiver_id, sender_id)
            .await
    }

    async fn ensure_sender(&self, user_id: Uuid) -> Result<()> {
        if !self.user_service.exists(user_id).await? {
            return Err(AppError::UnknownSender);
        }
        Ok(())
    }

    async fn ensure_receiver(&self, user_id: Uuid) -> Result<()> {
        if !self.user_service.exists(user_id).await? {
            return Err(AppError::UnknownReceiver);
        }
        Ok(())
    }
}
