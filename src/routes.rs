use crate::{message, state::AppState, user};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        user::user_handlers::register_user,
        message::message_handlers::send_message,
        message::message_handlers::get_received_messages,
        message::message_handlers::get_sent_messages,
        message::message_handlers::get_received_messages_from,
    ),
    components(
        schemas(
            user::RegisterUserRequest,
            user::UserResponse,
            message::SendMessageRequest,
            message::MessageResponse,
            message::MessageListResponse,
        )
    ),
    tags(
        (name = "users", description = "User registration"),
        (name = "messages", description = "Sending and reading direct messages")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let user_routes = Router::new().route("/", post(user::register_user));

    let message_routes = Router::new()
        .route(
            "/",
            get(message::get_received_messages).post(message::send_message),
        )
        .route("/sent", get(message::get_sent_messages))
        .route(
            "/received-from/:sender_id",
            get(message::get_received_messages_from),
        );

    let api_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/messages", message_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
