//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint that receives contact enquiries as JSON
    /// Example: https://hooks.example.com/contact
    pub contact_webhook_url: Option<String>,

    /// Only log enquiries, even when a webhook is configured
    pub contact_log_only: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            contact_webhook_url: std::env::var("CONTACT_WEBHOOK_URL").ok(),
            contact_log_only: std::env::var("CONTACT_LOG_ONLY")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Check if a contact webhook is configured
    pub fn has_contact_webhook(&self) -> bool {
        self.contact_webhook_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
