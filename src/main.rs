mod db;
mod error;
mod message;
mod middleware;
mod repositories;
mod routes;
mod state;
mod user;

use anyhow::Context;
use db::{create_pool, run_migrations};
use message::{MessageRepository, MessageService, MessageStore};
use repositories::InMemoryStore;
use routes::create_router;
use state::{AppState, Config};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user::{UserRepository, UserService, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,direct_messaging=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let (user_store, message_store): (Arc<dyn UserStore>, Arc<dyn MessageStore>) =
        match config.database_url.as_deref() {
            Some(database_url) => {
                tracing::info!("Connecting to database...");
                let db = create_pool(database_url, config.database_max_connections)
                    .await
                    .context("failed to connect to the database")?;

                tracing::info!("Running migrations...");
                run_migrations(&db)
                    .await
                    .context("failed to run database migrations")?;

                let user_store: Arc<dyn UserStore> = Arc::new(UserRepository::new(db.clone()));
                let message_store: Arc<dyn MessageStore> = Arc::new(MessageRepository::new(db));
                (user_store, message_store)
            }
            None => {
                tracing::warn!("DATABASE_URL is not set, data is kept in memory only");
                let store = Arc::new(InMemoryStore::new());
                let user_store: Arc<dyn UserStore> = store.clone();
                let message_store: Arc<dyn MessageStore> = store;
                (user_store, message_store)
            }
        };

    let user_service = UserService::new(user_store);
    let message_service = MessageService::new(message_store, user_service.clone());

    let state = AppState {
        user_service,
        message_service,
    };

    let app = create_router(state);

    let addr = config.bind_address();
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
