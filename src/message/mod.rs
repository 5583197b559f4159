pub mod message_dto;
pub mod message_handlers;
pub mod message_models;
pub mod message_repository;
pub mod message_service;

pub use message_dto::SendMessageRequest;
pub use message_handlers::{
    get_received_messages, get_received_messages_from, get_sent_messages, send_message,
};
pub use message_models::{MessageListResponse, MessageResponse};
pub use message_repository::{MessageRepository, MessageStore};
pub use message_service::MessageService;
