use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::user::user_models::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Builds a not-yet-persisted message stamped with the current instant.
    pub fn new(sender: &User, receiver: &User, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender_id: sender.id,
            receiver_id: receiver.id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub id: Uuid,
    pub content: String,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            content: message.content,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
}

impl From<Vec<Message>> for MessageListResponse {
    fn from(messages: Vec<Message>) -> Self {
        Self {
            messages: messages.into_iter().map(MessageResponse::from).collect(),
        }
    }
}
