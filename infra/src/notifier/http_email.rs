//! HTTP email API service
//!
//! Posts a JSON message to a transactional email endpoint:
//!
//! ```text
//! POST {api_url}
//! Authorization: Bearer {api_key}
//! {"from": "...", "to": "...", "subject": "...", "text": "..."}
//! ```
//!
//! Any 2xx status is a successful send. The message id is taken from an
//! `id` or `message_id` field of the response body when present.

use async_trait::async_trait;
use radar_shared::utils::email::{is_valid_email, mask_email};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use super::email_service::{EmailMessage, EmailService};
use crate::config::NotifierConfig;
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SendResponse {
    #[serde(default, alias = "message_id")]
    id: Option<String>,
}

/// Email service backed by an HTTP API
pub struct HttpEmailService {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_address: String,
}

impl HttpEmailService {
    /// Build the service; fails if the endpoint, key or sender is unusable
    pub fn new(config: &NotifierConfig) -> Result<Self, InfrastructureError> {
        let api_url = config.api_url.trim();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(InfrastructureError::Config(
                "NOTIFIER_API_URL must be an http(s) URL".to_string(),
            ));
        }
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "NOTIFIER_API_KEY must be set".to_string(),
            ));
        }
        if !is_valid_email(&config.from_address) {
            return Err(InfrastructureError::Config(
                "NOTIFIER_FROM_ADDRESS must be an email address".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        tracing::info!(api_url = %api_url, "HTTP email service initialized");

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            api_key: config.api_key.trim().to_string(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl EmailService for HttpEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let masked = mask_email(&message.to);
        let payload = SendRequest {
            from: &self.from_address,
            to: &message.to,
            subject: &message.subject,
            text: &message.body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await.map_err(|e| {
            tracing::error!(provider = "http", email = %masked, error = %e, "Email request failed");
            InfrastructureError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                provider = "http",
                email = %masked,
                status = status.as_u16(),
                "Email API rejected message"
            );
            return Err(InfrastructureError::Notifier(format!(
                "Email API returned status {}",
                status
            )));
        }

        let body = response.json::<SendResponse>().await.unwrap_or_default();
        let message_id = body.id.unwrap_or_else(|| format!("http_{}", Uuid::new_v4()));

        tracing::info!(
            provider = "http",
            email = %masked,
            message_id = %message_id,
            "Email accepted by API"
        );
        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
