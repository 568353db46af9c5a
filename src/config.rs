use crate::errors::ContactError;
use std::time::Duration;

pub struct ContactConfig {
    pub base_url: String,
    pub endpoint_path: String,
    pub captcha_field: String,
    pub redirect_to: String,
    pub toast_duration: Duration,
    pub redirect_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8080"),
            endpoint_path: String::from("/api/contact"),
            captcha_field: String::from("cf-turnstile-response"),
            redirect_to: String::from("thank-you.html"),
            toast_duration: Duration::from_millis(3000),
            redirect_delay: Duration::from_millis(1500),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ContactConfig {
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }

    /// Overlays values from `lookup` (usually the process environment) on the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("CONTACT_BASE_URL") {
            config.base_url = value;
        }
        if let Some(value) = lookup("CONTACT_ENDPOINT_PATH") {
            config.endpoint_path = value;
        }
        if let Some(value) = lookup("CONTACT_CAPTCHA_FIELD") {
            config.captcha_field = value;
        }
        if let Some(value) = lookup("CONTACT_REDIRECT_TO") {
            config.redirect_to = value;
        }
        if let Some(value) = lookup("CONTACT_TOAST_MS") {
            config.toast_duration = Duration::from_millis(parse_number("CONTACT_TOAST_MS", &value)?);
        }
        if let Some(value) = lookup("CONTACT_REDIRECT_MS") {
            config.redirect_delay =
                Duration::from_millis(parse_number("CONTACT_REDIRECT_MS", &value)?);
        }
        if let Some(value) = lookup("CONTACT_TIMEOUT_SECS") {
            config.request_timeout =
                Duration::from_secs(parse_number("CONTACT_TIMEOUT_SECS", &value)?);
        }

        Ok(config)
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64, ContactError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ContactError::ConfigError(format!("{} must be a number: {}", key, e)))
}

/// Reads the process environment; load `.env` before calling this.
pub fn get_contact_config() -> Result<ContactConfig, ContactError> {
    ContactConfig::from_lookup(|key| std::env::var(key).ok())
}
