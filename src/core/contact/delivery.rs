//! Where accepted contact enquiries go.
//!
//! The studio has not chosen a CRM yet, so delivery sits behind [`ContactSink`].
//! By default enquiries are only logged; setting `CONTACT_WEBHOOK_URL`
//! forwards them as JSON to an external endpoint.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ContactError, ContactSubmission};
use crate::core::config::Config;

/// Destination for validated contact submissions.
pub trait ContactSink: Send + Sync + 'static {
    fn deliver(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactError>> + Send;
}

/// Records enquiries in the server log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            company = %submission.company,
            project_chars = submission.project.chars().count(),
            "Contact enquiry received"
        );
        Ok(())
    }
}

/// JSON body posted to the webhook.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    #[serde(flatten)]
    submission: &'a ContactSubmission,
    received_at: DateTime<Utc>,
}

/// Forwards enquiries to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContactSink for WebhookSink {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let payload = WebhookPayload {
            submission,
            received_at: Utc::now(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ContactError::Delivery(e.without_url().to_string()))?;

        if !response.status().is_success() {
            tracing::warn!("Contact webhook answered with status {}", response.status());
            return Err(ContactError::Delivery(format!(
                "webhook returned {}",
                response.status()
            )));
        }

        tracing::info!("Contact enquiry forwarded to webhook");
        Ok(())
    }
}

/// Sink selected from the environment at startup.
#[derive(Debug, Clone)]
pub enum ConfiguredSink {
    Log(LogSink),
    Webhook(WebhookSink),
}

impl ConfiguredSink {
    pub fn from_config(config: &Config) -> Self {
        match config.contact_webhook_url.as_deref() {
            Some(url) if !config.contact_log_only && !url.trim().is_empty() => {
                ConfiguredSink::Webhook(WebhookSink::new(url.trim()))
            }
            _ => ConfiguredSink::Log(LogSink),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ConfiguredSink::Log(_) => "log",
            ConfiguredSink::Webhook(_) => "webhook",
        }
    }
}

impl ContactSink for ConfiguredSink {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        match self {
            ConfiguredSink::Log(sink) => sink.deliver(submission).await,
            ConfiguredSink::Webhook(sink) => sink.deliver(submission).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<&str>, log_only: bool) -> Config {
        Config {
            contact_webhook_url: url.map(str::to_string),
            contact_log_only: log_only,
        }
    }

    #[test]
    fn test_defaults_to_log_sink() {
        assert_eq!(ConfiguredSink::from_config(&config(None, false)).describe(), "log");
    }

    #[test]
    fn test_webhook_when_url_set() {
        let sink = ConfiguredSink::from_config(&config(Some(" https://hooks.example.com/c "), false));
        match sink {
            ConfiguredSink::Webhook(webhook) => {
                assert_eq!(webhook.url(), "https://hooks.example.com/c")
            }
            other => panic!("expected webhook sink, got {}", other.describe()),
        }
    }

    #[test]
    fn test_log_only_overrides_url() {
        let sink = ConfiguredSink::from_config(&config(Some("https://hooks.example.com"), true));
        assert_eq!(sink.describe(), "log");
    }

    #[test]
    fn test_blank_url_falls_back_to_log() {
        assert_eq!(ConfiguredSink::from_config(&config(Some("  "), false)).describe(), "log");
    }

    #[tokio::test]
    async fn test_log_sink_accepts() {
        let submission = ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: "Engines".to_string(),
            project: "Brand".to_string(),
        };
        assert_eq!(LogSink.deliver(&submission).await, Ok(()));
    }

    #[test]
    fn test_webhook_payload_is_flat() {
        let submission = ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: "Engines".to_string(),
            project: "Brand".to_string(),
        };
        let payload = WebhookPayload {
            submission: &submission,
            received_at: Utc::now(),
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["project"], "Brand");
        assert!(json["received_at"].is_string());
    }

    async fn rejecting_webhook() -> String {
        use axum::{Router, http::StatusCode, routing::post};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route(
            "/secret-token/hook",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/secret-token/hook")
    }

    #[tokio::test]
    async fn test_webhook_error_status_hides_url() {
        let url = rejecting_webhook().await;
        let sink = WebhookSink::new(url);

        let err = sink
            .deliver(&ContactSubmission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                company: "Engines".to_string(),
                project: "Brand".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            ContactError::Delivery(message) => {
                assert!(message.contains("500"));
                assert!(!message.contains("secret-token"));
            }
            other => panic!("expected delivery error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_webhook_hides_url() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let sink = WebhookSink::new(format!("http://{addr}/secret-token/hook"));

        let err = sink.deliver(&ContactSubmission::default()).await.unwrap_err();

        match err {
            ContactError::Delivery(message) => assert!(!message.contains("secret-token")),
            other => panic!("expected delivery error, got {other:?}"),
        }
    }
}
