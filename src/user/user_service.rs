use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    user::{user_models::User, user_repository::UserStore},
};

/// Owns display-name uniqueness and user lookups.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Registers a new user under `display_name`.
    ///
    /// The lookup is only a pre-check; two concurrent registrations can both
    /// pass it, so a uniqueness violation reported by the store on write is
    /// translated into the same [`AppError::DuplicateName`].
    pub async fn register(&self, display_name: &str) -> Result<User> {
        if self.store.find_by_display_name(display_name).await?.is_some() {
            tracing::info!(display_name, "Rejected registration with a taken display name");
            return Err(AppError::DuplicateName);
        }

        let user = self
            .store
            .save(&User::new(display_name))
            .await
            .map_err(|e| match e {
                AppError::ConstraintViolation(_) => {
                    tracing::info!(display_name, "Display name taken by a concurrent registration");
                    AppError::DuplicateName
                }
                other => other,
            })?;

        tracing::info!(user_id = %user.id, display_name = %user.display_name, "A new user is created");
        Ok(user)
    }

    pub async fn exists(&self, user_id: Uuid) -> Result<bool> {
        Ok(self.store.find_by_id(user_id).await?.is_some())
    }

    /// Loads a user that callers have already checked with [`Self::exists`].
    pub async fn resolve(&self, user_id: Uuid) -> Result<User> {
        self.store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryStore;
    use async_trait::async_trait;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryStore::new()))
    }

    /// Misses every pre-check, the way a racing registration would.
    struct RacingStore {
        inner: InMemoryStore,
    }

    #[async_trait]
    impl UserStore for RacingStore {
        async fn find_by_display_name(&self, _display_name: &str) -> Result<Option<User>> {
            Ok(None)
        }

        async fn save(&self, user: &User) -> Result<User> {
            self.inner.save(user).await
        }

        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
            self.inner.find_by_id(user_id).await
        }
    }

    #[tokio::test]
    async fn test_register_assigns_id_and_keeps_name() {
        let service = service();
        let user = service.register("alice").await.unwrap();

        assert_eq!(user.display_name, "alice");
        assert!(service.exists(user.id).await.unwrap());
        assert_eq!(service.resolve(user.id).await.unwrap(), user);
    }

    #[tokio::test]
    async fn test_register_twice_fails_with_duplicate_name() {
        let service = service();
        let first = service.register("alice").await;
        let second = service.register("alice").await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(AppError::DuplicateName)));
    }

    #[tokio::test]
    async fn test_display_names_are_case_sensitive() {
        let service = service();
        let upper = service.register("Alice").await.unwrap();
        let lower = service.register("alice").await.unwrap();
        assert_ne!(upper.id, lower.id);
    }

    #[tokio::test]
    async fn test_store_constraint_violation_becomes_duplicate_name() {
        let service = UserService::new(Arc::new(RacingStore {
            inner: InMemoryStore::new(),
        }));
        service.register("bob").await.unwrap();

        let err = service.register("bob").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateName));
    }

    #[tokio::test]
    async fn test_exists_is_false_for_unknown_id() {
        assert!(!service().exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_is_not_found() {
        let err = service().resolve(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
