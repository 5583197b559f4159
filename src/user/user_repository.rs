use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::user_models::User;
use crate::{db::is_unique_violation, error::{AppError, Result}};

/// Persistence seam for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_display_name(&self, display_name: &str) -> Result<Option<User>>;

    /// Fails with [`AppError::ConstraintViolation`] when the display name is already stored.
    async fn save(&self, user: &User) -> Result<User>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>>;
}

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_display_name(&self, display_name: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, display_name FROM users WHERE display_name = $1",
        )
        .bind(display_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, display_name) VALUES ($1, $2)
             RETURNING id, display_name",
        )
        .bind(user.id)
        .bind(&user.display_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::ConstraintViolation(format!(
                    "display name '{}' already exists",
                    user.display_name
                ))
            } else {
                AppError::Database(e)
            }
        })
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, display_name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}
