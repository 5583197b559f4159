pub mod user_dto;
pub mod user_handlers;
pub mod user_models;
pub mod user_repository;
pub mod user_service;

pub use user_dto::RegisterUserRequest;
pub use user_handlers::register_user;
pub use user_models::UserResponse;
pub use user_repository::{UserRepository, UserStore};
pub use user_service::UserService;
