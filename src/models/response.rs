use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResponse {
    pub field: String,
    pub message: String,
}

impl ValidationResponse {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Body returned by the contact endpoint on a non-success status.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
