//! In-memory doubles for the view port and the transport.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

use crate::client::ContactTransport;
use crate::errors::ContactError;
use crate::models::submission::{ContactSubmission, FormSnapshot};
use crate::ui::{ContactView, Toast};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    StatusShown(Toast),
    StatusHidden,
    Loading(bool),
    AttachmentName(String),
    FormReset,
    Navigated(String),
}

#[derive(Default)]
pub struct RecordingView {
    form: Mutex<FormSnapshot>,
    token: Mutex<Option<String>>,
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn with_form(form: FormSnapshot, token: Option<&str>) -> Self {
        Self {
            form: Mutex::new(form),
            token: Mutex::new(token.map(str::to_string)),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn set_form(&self, form: FormSnapshot) {
        *self.form.lock().unwrap() = form;
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn current_toast(&self) -> Option<Toast> {
        match self.events().into_iter().rev().find(|e| {
            matches!(e, ViewEvent::StatusShown(_) | ViewEvent::StatusHidden)
        }) {
            Some(ViewEvent::StatusShown(toast)) => Some(toast),
            _ => None,
        }
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ContactView for RecordingView {
    fn set_status(&self, toast: Option<&Toast>) {
        match toast {
            Some(toast) => self.record(ViewEvent::StatusShown(toast.clone())),
            None => self.record(ViewEvent::StatusHidden),
        }
    }

    fn set_loading(&self, show: bool) {
        self.record(ViewEvent::Loading(show));
    }

    fn read_form(&self) -> FormSnapshot {
        self.form.lock().unwrap().clone()
    }

    fn captcha_token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set_attachment_name(&self, name: &str) {
        self.record(ViewEvent::AttachmentName(name.to_string()));
    }

    fn reset_form(&self) {
        *self.form.lock().unwrap() = FormSnapshot::default();
        self.record(ViewEvent::FormReset);
    }

    fn navigate(&self, destination: &str) {
        self.record(ViewEvent::Navigated(destination.to_string()));
    }
}

pub enum StubReply {
    Accept,
    Reject(u16, String),
    Fail(String),
}

/// Transport that answers with a canned reply, optionally held until released.
pub struct StubTransport {
    reply: StubReply,
    calls: AtomicUsize,
    gate: Option<Notify>,
    submissions: Mutex<Vec<ContactSubmission>>,
}

impl StubTransport {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            gate: None,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn gated(reply: StubReply) -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::new(reply)
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactTransport for StubTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.submissions.lock().unwrap().push(submission.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            StubReply::Accept => Ok(()),
            StubReply::Reject(status, message) => Err(ContactError::Rejected {
                status: *status,
                message: message.clone(),
            }),
            StubReply::Fail(message) => Err(ContactError::TransportError(message.clone())),
        }
    }
}
