use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::AppError;

/// Header carrying the caller's user id on message routes.
pub const USER_ID_HEADER: &str = "UserId";

/// Extractor for the calling user's id, taken from the `UserId` header.
pub struct CallerId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| {
                AppError::BadRequest(format!("Required header '{}' is missing", USER_ID_HEADER))
            })?
            .to_str()
            .map_err(|_| AppError::BadRequest(format!("Header '{}' is not valid text", USER_ID_HEADER)))?;

        Uuid::parse_str(raw.trim())
            .map(CallerId)
            .map_err(|_| AppError::BadRequest(format!("Header '{}' must be a UUID", USER_ID_HEADER)))
    }
}
