use async_trait::async_trait;
use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::config::ContactConfig;
use crate::errors::{ContactError, REQUEST_FAILED_MESSAGE};
use crate::models::response::ApiErrorBody;
use crate::models::submission::ContactSubmission;

/// Delivers a contact submission to the backend.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
    captcha_field: String,
}

impl HttpTransport {
    pub fn new(config: &ContactConfig) -> Result<Self, ContactError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
            captcha_field: config.captcha_field.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(&self, submission: &ContactSubmission) -> Result<Form, ContactError> {
        let snapshot = &submission.snapshot;
        let mut form = Form::new();

        for field in ["name", "email", "message"] {
            if let Some(value) = snapshot.field(field) {
                form = form.text(field, value.to_string());
            }
        }

        for attachment in &snapshot.attachments {
            let part = Part::bytes(attachment.data.clone())
                .file_name(attachment.file_name.clone())
                .mime_str(&attachment.content_type)
                .map_err(|e| {
                    ContactError::FileProcessingError(format!(
                        "Invalid media type for {}: {}",
                        attachment.file_name, e
                    ))
                })?;
            form = form.part("attachment", part);
        }

        Ok(form.text(self.captcha_field.clone(), submission.captcha_token.clone()))
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let form = self.build_form(submission)?;

        debug!("POST {}", self.endpoint);
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await?;
        let parsed: ApiErrorBody = serde_json::from_slice(&body).map_err(|e| {
            warn!("Unreadable error body from {} ({}): {}", self.endpoint, status, e);
            ContactError::InvalidResponse(format!("Unexpected response from server: {}", e))
        })?;

        Err(ContactError::Rejected {
            status: status.as_u16(),
            message: parsed
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string()),
        })
    }
}
