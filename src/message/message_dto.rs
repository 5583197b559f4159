use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::user::user_dto::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    pub receiver_id: Uuid,
    #[validate(
        length(max = 3000, message = "The message shouldn't be more than 3000 characters."),
        custom(function = "not_blank", message = "The message shouldn't be blank.")
    )]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content: &str) -> SendMessageRequest {
        SendMessageRequest {
            receiver_id: Uuid::new_v4(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_accepts_regular_message() {
        assert!(request("hello there").validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_message() {
        assert!(request("").validate().is_err());
        assert!(request("\n\t ").validate().is_err());
    }

    #[test]
    fn test_length_limit() {
        assert!(request(&"x".repeat(3000)).validate().is_ok());
        assert!(request(&"x".repeat(3001)).validate().is_err());
    }
}
