use crate::models::response::ValidationResponse;
use regex::Regex;
use std::sync::LazyLock;

pub const ALLOWED_ATTACHMENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

// (form field, label shown to the user)
const REQUIRED_FIELDS: [(&str, &str); 3] = [
    ("name", "Full Name"),
    ("email", "Email"),
    ("message", "Message"),
];

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: String, content_type: String, data: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type,
            data,
        }
    }

    pub fn is_allowed_type(&self) -> bool {
        ALLOWED_ATTACHMENT_TYPES.contains(&self.content_type.as_str())
    }
}

/// Field values captured from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl FormSnapshot {
    pub fn new(name: Option<String>, email: Option<String>, message: Option<String>) -> Self {
        Self {
            name,
            email,
            message,
            attachments: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Value of a named field, `None` when absent or blank.
    pub fn field(&self, field: &str) -> Option<&str> {
        let value = match field {
            "name" => self.name.as_deref(),
            "email" => self.email.as_deref(),
            "message" => self.message.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.trim().is_empty())
    }

    fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    pub fn validate(&self) -> Vec<ValidationResponse> {
        let mut validation_errors = Vec::new();

        for (field, label) in REQUIRED_FIELDS {
            if self.field(field).is_none() {
                validation_errors.push(ValidationResponse::new(
                    field,
                    format!("{} is required", label),
                ));
            }
        }

        if let Some(email) = self.field("email") {
            if !Self::is_valid_email(email) {
                validation_errors.push(ValidationResponse::new(
                    "email",
                    "Please provide a valid email!",
                ));
            }
        }

        for attachment in self.attachments.iter().filter(|a| !a.is_allowed_type()) {
            validation_errors.push(ValidationResponse::new(
                "attachment",
                format!(
                    "Invalid file type: {}. Only JPG and PNG files allowed!",
                    attachment.file_name
                ),
            ));
        }

        validation_errors
    }

    pub fn validate_submission(&self) -> Result<(), Vec<ValidationResponse>> {
        let validation_errors = self.validate();
        if validation_errors.is_empty() {
            Ok(())
        } else {
            Err(validation_errors)
        }
    }
}

/// A validated snapshot together with the CAPTCHA token that unlocks it.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub snapshot: FormSnapshot,
    pub captcha_token: String,
}

impl ContactSubmission {
    pub fn new(snapshot: FormSnapshot, captcha_token: String) -> Self {
        Self {
            snapshot,
            captcha_token,
        }
    }
}
