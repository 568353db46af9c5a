use log::debug;
use std::path::Path;

use crate::errors::ContactError;
use crate::models::submission::Attachment;

// Reads a file picked for upload, declaring its media type from the extension
pub async fn load_attachment(path: &Path) -> Result<Attachment, ContactError> {
    let file_name = path
        .file_name()
        .and_then(std::ffi::OsStr::to_str)
        .ok_or_else(|| {
            ContactError::FileProcessingError(format!("Not a file path: {}", path.display()))
        })?
        .to_string();

    let data = tokio::fs::read(path).await.map_err(|e| {
        ContactError::FileProcessingError(format!(
            "Failed to read file {}: {}",
            path.display(),
            e
        ))
    })?;

    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    debug!("Loaded attachment {} ({}, {} bytes)", file_name, content_type, data.len());

    Ok(Attachment::new(file_name, content_type, data))
}
