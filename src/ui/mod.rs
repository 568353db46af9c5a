use crate::models::submission::FormSnapshot;

pub mod terminal;
pub mod toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Everything the controller needs from the page hosting the contact form.
///
/// Implementations own the actual widgets (status region, spinner, form
/// fields, attachment label) and must tolerate calls from timer tasks.
pub trait ContactView: Send + Sync {
    /// Shows `toast` in the status region, or hides the region on `None`.
    fn set_status(&self, toast: Option<&Toast>);
    fn set_loading(&self, show: bool);
    fn read_form(&self) -> FormSnapshot;
    /// Value of the hidden CAPTCHA input, if the widget rendered one.
    fn captcha_token(&self) -> Option<String>;
    fn set_attachment_name(&self, name: &str);
    fn reset_form(&self);
    fn navigate(&self, destination: &str);
}
