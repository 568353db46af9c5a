use log::{error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::client::ContactTransport;
use crate::config::ContactConfig;
use crate::errors::ContactError;
use crate::models::submission::ContactSubmission;
use crate::ui::toast::Toaster;
use crate::ui::{ContactView, ToastKind};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug)]
pub enum SubmitOutcome {
    Sent,
    Failed(ContactError),
    /// Another submission was still pending.
    Ignored,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ContactFormController {
    view: Arc<dyn ContactView>,
    transport: Arc<dyn ContactTransport>,
    toaster: Toaster,
    redirect_to: String,
    redirect_delay: Duration,
    in_flight: AtomicBool,
    redirect: Mutex<Option<JoinHandle<()>>>,
}

impl ContactFormController {
    pub fn new(
        view: Arc<dyn ContactView>,
        transport: Arc<dyn ContactTransport>,
        config: &ContactConfig,
    ) -> Self {
        Self {
            toaster: Toaster::new(Arc::clone(&view), config.toast_duration),
            view,
            transport,
            redirect_to: config.redirect_to.clone(),
            redirect_delay: config.redirect_delay,
            in_flight: AtomicBool::new(false),
            redirect: Mutex::new(None),
        }
    }

    pub fn notify(&self, message: impl Into<String>, is_error: bool) {
        let kind = if is_error {
            ToastKind::Error
        } else {
            ToastKind::Success
        };
        self.toaster.notify(message, kind);
    }

    pub fn set_loading(&self, show: bool) {
        self.view.set_loading(show);
    }

    pub fn on_attachment_change(&self) {
        if let Some(first) = self.view.read_form().attachments.first() {
            self.view.set_attachment_name(&first.file_name);
        }
    }

    pub async fn on_submit(&self) -> SubmitOutcome {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            warn!("Submission already in progress, ignoring");
            return SubmitOutcome::Ignored;
        }
        let _guard = InFlight(&self.in_flight);

        self.set_loading(true);
        match self.submit().await {
            Ok(()) => {
                info!("Contact message delivered");
                self.notify(SUCCESS_MESSAGE, false);
                self.view.reset_form();
                self.set_loading(false);
                self.schedule_redirect();
                SubmitOutcome::Sent
            }
            Err(err) => {
                match &err {
                    ContactError::TransportError(_) | ContactError::InvalidResponse(_) => {
                        error!("Contact submission failed: {}", err)
                    }
                    _ => warn!("Contact submission not sent: {}", err),
                }
                self.notify(err.user_message(), true);
                self.set_loading(false);
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn submit(&self) -> Result<(), ContactError> {
        let snapshot = self.view.read_form();

        let token = self
            .view
            .captcha_token()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ContactError::MissingCaptcha)?;

        snapshot.validate_submission()?;

        info!("Submitting contact message");
        self.transport
            .submit(&ContactSubmission::new(snapshot, token))
            .await
    }

    fn schedule_redirect(&self) {
        let view = Arc::clone(&self.view);
        let destination = self.redirect_to.clone();
        let delay = self.redirect_delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!("Redirecting to {}", destination);
            view.navigate(&destination);
        });

        let mut slot = self.redirect.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(task) {
            previous.abort();
        }
    }

    /// Waits for a scheduled redirect, if any, to happen.
    pub async fn settle(&self) {
        let pending = self
            .redirect
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(task) = pending {
            let _ = task.await;
        }
    }
}
