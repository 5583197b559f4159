use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::message_models::Message;
use crate::error::Result;

/// Persistence seam for messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn save(&self, message: &Message) -> Result<Message>;

    async fn find_by_receiver(&self, receiver_id: Uuid) -> Result<Vec<Message>>;

    async fn find_by_sender(&self, sender_id: Uuid) -> Result<Vec<Message>>;

    async fn find_by_receiver_and_sender(
        &self,
        receiver_id: Uuid,
        sender_id: Uuid,
    ) -> Result<Vec<Message>>;
}

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for MessageRepository {
    async fn save(&self, message: &Message) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (id, content, sender_id, receiver_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, content, sender_id, receiver_id, created_at",
        )
        .bind(message.id)
        .bind(&message.content)
        .bind(message.sender_id)
        .bind(message.receiver_id)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn find_by_receiver(&self, receiver_id: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, content, sender_id, receiver_id, created_at FROM messages
             WHERE receiver_id = $1
             ORDER BY created_at, id",
        )
        .bind(receiver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn find_by_sender(&self, sender_id: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, content, sender_id, receiver_id, created_at FROM messages
             WHERE sender_id = $1
             ORDER BY created_at, id",
        )
        .bind(sender_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn find_by_receiver_and_sender(
        &self,
        receiver_id: Uuid,
        sender_id: Uuid,
    ) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, content, sender_id, receiver_id, created_at FROM messages
             WHERE receiver_id = $1 AND sender_id = $2
             ORDER BY created_at, id",
        )
        .bind(receiver_id)
        .bind(sender_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
