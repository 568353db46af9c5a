pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod testing;

pub use client::{ContactTransport, HttpTransport};
pub use config::{get_contact_config, ContactConfig};
pub use controller::{ContactFormController, SubmitOutcome};
pub use errors::ContactError;
pub use models::submission::{Attachment, ContactSubmission, FormSnapshot};
pub use ui::{ContactView, Toast, ToastKind};
