use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    error::Result,
    middleware::AppJson,
    state::AppState,
    user::{user_dto::RegisterUserRequest, user_models::UserResponse},
};

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User is created", body = UserResponse),
        (status = 400, description = "Invalid request property"),
        (status = 409, description = "Display name is already taken")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUserRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let user = state.user_service.register(&payload.display_name).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
