use crate::models::response::ValidationResponse;
use std::fmt;

pub const CAPTCHA_REQUIRED_MESSAGE: &str = "Please complete the CAPTCHA verification!";
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";
pub const FALLBACK_MESSAGE: &str = "Failed to send email";

#[derive(Debug)]
pub enum ContactError {
    MissingCaptcha,
    ValidationError(String),
    Rejected { status: u16, message: String },
    InvalidResponse(String),
    TransportError(String),
    FileProcessingError(String),
    ConfigError(String),
}

impl ContactError {
    /// Text shown to the user in the status toast.
    pub fn user_message(&self) -> String {
        let message = match self {
            ContactError::MissingCaptcha => CAPTCHA_REQUIRED_MESSAGE,
            ContactError::ValidationError(msg)
            | ContactError::InvalidResponse(msg)
            | ContactError::TransportError(msg)
            | ContactError::FileProcessingError(msg)
            | ContactError::ConfigError(msg) => msg.as_str(),
            ContactError::Rejected { message, .. } => message.as_str(),
        };

        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message.to_string()
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContactError::MissingCaptcha => write!(f, "Captcha error: token missing"),
            ContactError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ContactError::Rejected { status, message } => {
                write!(f, "Rejected with status {}: {}", status, message)
            }
            ContactError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ContactError::TransportError(msg) => write!(f, "Transport error: {}", msg),
            ContactError::FileProcessingError(msg) => {
                write!(f, "File processing error: {}", msg)
            }
            ContactError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for ContactError {}

impl From<Vec<ValidationResponse>> for ContactError {
    fn from(errors: Vec<ValidationResponse>) -> Self {
        // The toast shows every problem at once
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<&str>>()
            .join(", ");

        ContactError::ValidationError(message)
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        ContactError::TransportError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_joined_in_order() {
        let err: ContactError = vec![
            ValidationResponse::new("name", "Full Name is required"),
            ValidationResponse::new("email", "Please provide a valid email!"),
        ]
        .into();

        assert_eq!(
            err.user_message(),
            "Full Name is required, Please provide a valid email!"
        );
        assert!(err.to_string().starts_with("Validation error:"));
    }

    #[test]
    fn empty_messages_fall_back_to_generic_text() {
        let err = ContactError::TransportError(String::new());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn rejected_shows_server_message_only() {
        let err = ContactError::Rejected {
            status: 422,
            message: "X".to_string(),
        };
        assert_eq!(err.user_message(), "X");
        assert_eq!(err.to_string(), "Rejected with status 422: X");
    }

    #[test]
    fn missing_captcha_has_fixed_prompt() {
        assert_eq!(
            ContactError::MissingCaptcha.user_message(),
            CAPTCHA_REQUIRED_MESSAGE
        );
    }
}
