use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    message::{message_models::Message, message_repository::MessageStore},
    user::{user_models::User, user_repository::UserStore},
};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    users_by_name: HashMap<String, Uuid>,
    messages: Vec<Message>,
}

/// Process-local store used when no database is configured.
///
/// Display names are unique under the write lock, mirroring the
/// `users_display_name_key` constraint of the Postgres schema.
/// Messages come back in insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select_messages(&self, predicate: impl Fn(&Message) -> bool) -> Vec<Message> {
        self.tables
            .read()
            .await
            .messages
            .iter()
            .filter(|m| predicate(*m))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_by_display_name(&self, display_name: &str) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users_by_name
            .get(display_name)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<User> {
        let mut tables = self.tables.write().await;
        if tables.users_by_name.contains_key(&user.display_name) {
            return Err(AppError::ConstraintViolation(format!(
                "display name '{}' already exists",
                user.display_name
            )));
        }
        tables
            .users_by_name
            .insert(user.display_name.clone(), user.id);
        tables.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        Ok(self.tables.read().await.users.get(&user_id).cloned())
    }
}

#[async_trait]
impl MessageStore for InMemoryStore {
    async fn save(&self, message: &Message) -> Result<Message> {
        self.tables.write().await.messages.push(message.clone());
        Ok(message.clone())
    }

    async fn find_by_receiver(&self, receiver_id: Uuid) -> Result<Vec<Message>> {
        Ok(self.select_messages(|m| m.receiver_id == receiver_id).await)
    }

    async fn find_by_sender(&self, sender_id: Uuid) -> Result<Vec<Message>> {
        Ok(self.select_messages(|m| m.sender_id == sender_id).await)
    }

    async fn find_by_receiver_and_sender(
        &self,
        receiver_id: Uuid,
        sender_id: Uuid,
    ) -> Result<Vec<Message>> {
        Ok(self
            .select_messages(|m| m.receiver_id == receiver_id && m.sender_id == sender_id)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_rejects_taken_display_name() {
        let store = InMemoryStore::new();
        UserStore::save(&store, &User::new("alice")).await.unwrap();

        let err = UserStore::save(&store, &User::new("alice")).await.unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_display_name_lookup_is_case_sensitive() {
        let store = InMemoryStore::new();
        UserStore::save(&store, &User::new("Alice")).await.unwrap();

        assert!(store.find_by_display_name("alice").await.unwrap().is_none());
        assert!(store.find_by_display_name("Alice").await.unwrap().is_some());
        UserStore::save(&store, &User::new("alice")).await.unwrap();
    }

    #[tokio::test]
    async fn test_messages_keep_insertion_order() {
        let store = InMemoryStore::new();
        let a = User::new("a");
        let b = User::new("b");

        let first = Message::new(&a, &b, "first");
        let second = Message::new(&a, &b, "second");
        MessageStore::save(&store, &first).await.unwrap();
        MessageStore::save(&store, &second).await.unwrap();

        let found = store.find_by_receiver_and_sender(b.id, a.id).await.unwrap();
        assert_eq!(found, vec![first, second]);
        assert!(store.find_by_receiver(a.id).await.unwrap().is_empty());
    }
}
