use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::Result,
    message::{
        message_dto::SendMessageRequest,
        message_models::{MessageListResponse, MessageResponse},
    },
    middleware::{AppJson, AppPath, CallerId},
    state::AppState,
};

/// Send a message to another user
#[utoipa::path(
    post,
    path = "/api/v1/messages",
    tag = "messages",
    request_body = SendMessageRequest,
    params(
        ("UserId" = Uuid, Header, description = "Id of the sending user")
    ),
    responses(
        (status = 201, description = "Message is sent", body = MessageResponse),
        (status = 400, description = "Invalid request property or missing UserId header"),
        (status = 409, description = "Sender and receiver are the same, or either is unknown")
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    CallerId(sender_id): CallerId,
    AppJson(payload): AppJson<SendMessageRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let message = state
        .message_service
        .send(sender_id, payload.receiver_id, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

/// Messages the calling user has received
#[utoipa::path(
    get,
    path = "/api/v1/messages",
    tag = "messages",
    params(
        ("UserId" = Uuid, Header, description = "Id of the receiving user")
    ),
    responses(
        (status = 200, description = "Received messages", body = MessageListResponse),
        (status = 400, description = "Missing or malformed UserId header"),
        (status = 409, description = "Unknown user")
    )
)]
pub async fn get_received_messages(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
) -> Result<impl IntoResponse> {
    let messages = state.message_service.list_received(user_id).await?;

    Ok((StatusCode::OK, Json(MessageListResponse::from(messages))))
}

/// Messages the calling user has sent
#[utoipa::path(
    get,
    path = "/api/v1/messages/sent",
    tag = "messages",
    params(
        ("UserId" = Uuid, Header, description = "Id of the sending user")
    ),
    responses(
        (status = 200, description = "Sent messages", body = MessageListResponse),
        (status = 400, description = "Missing or malformed UserId header"),
        (status = 409, description = "Unknown user")
    )
)]
pub async fn get_sent_messages(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
) -> Result<impl IntoResponse> {
    let messages = state.message_service.list_sent(user_id).await?;

    Ok((StatusCode::OK, Json(MessageListResponse::from(messages))))
}

/// Messages the calling user has received from one specific sender
#[utoipa::path(
    get,
    path = "/api/v1/messages/received-from/{sender_id}",
    tag = "messages",
    params(
        ("UserId" = Uuid, Header, description = "Id of the receiving user"),
        ("sender_id" = Uuid, Path, description = "Id of the sending user")
    ),
    responses(
        (status = 200, description = "Messages from the sender", body = MessageListResponse),
        (status = 400, description = "Missing or malformed UserId header"),
        (status = 409, description = "Unknown sender or receiver")
    )
)]
pub async fn get_received_messages_from(
    State(state): State<AppState>,
    CallerId(receiver_id): CallerId,
    AppPath(sender_id): AppPath<Uuid>,
) -> Result<impl IntoResponse> {
    let messages = state
        .message_service
        .list_received_from(receiver_id, sender_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageListResponse::from(messages))))
}
