use log::{debug, info};
use std::sync::Mutex;

use crate::models::submission::FormSnapshot;
use crate::ui::{ContactView, Toast};

#[derive(Default)]
struct TerminalState {
    form: FormSnapshot,
    captcha_token: Option<String>,
    status: Option<Toast>,
    loading: bool,
    attachment_label: Option<String>,
    location: Option<String>,
}

/// Contact page rendered on the command line: the form is whatever the
/// user passed as arguments and every UI effect is printed.
pub struct TerminalView {
    state: Mutex<TerminalState>,
}

impl TerminalView {
    pub fn new(form: FormSnapshot, captcha_token: Option<String>) -> Self {
        Self {
            state: Mutex::new(TerminalState {
                form,
                captcha_token,
                ..TerminalState::default()
            }),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut TerminalState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    pub fn status(&self) -> Option<Toast> {
        self.with_state(|s| s.status.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.with_state(|s| s.loading)
    }

    pub fn attachment_label(&self) -> Option<String> {
        self.with_state(|s| s.attachment_label.clone())
    }

    pub fn location(&self) -> Option<String> {
        self.with_state(|s| s.location.clone())
    }
}

impl ContactView for TerminalView {
    fn set_status(&self, toast: Option<&Toast>) {
        match toast {
            Some(toast) => {
                let marker = if toast.is_error() { "✗" } else { "✓" };
                println!("{} {}", marker, toast.message);
            }
            None => debug!("Status toast hidden"),
        }
        self.with_state(|s| s.status = toast.cloned());
    }

    fn set_loading(&self, show: bool) {
        let changed = self.with_state(|s| std::mem::replace(&mut s.loading, show) != show);
        if changed && show {
            println!("Sending message...");
        }
    }

    fn read_form(&self) -> FormSnapshot {
        self.with_state(|s| s.form.clone())
    }

    fn captcha_token(&self) -> Option<String> {
        self.with_state(|s| s.captcha_token.clone())
    }

    fn set_attachment_name(&self, name: &str) {
        println!("Attached: {}", name);
        self.with_state(|s| s.attachment_label = Some(name.to_string()));
    }

    fn reset_form(&self) {
        self.with_state(|s| {
            s.form = FormSnapshot::default();
            s.attachment_label = None;
        });
    }

    fn navigate(&self, destination: &str) {
        info!("Navigating to {}", destination);
        println!("→ {}", destination);
        self.with_state(|s| s.location = Some(destination.to_string()));
    }
}
