use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(
        length(max = 50, message = "The display name shouldn't be more than 50 characters."),
        custom(function = "not_blank", message = "The display name shouldn't be blank.")
    )]
    pub display_name: String,
}

/// Rejects empty and whitespace-only input.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
