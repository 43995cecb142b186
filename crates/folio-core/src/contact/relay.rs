use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};
use url::Url;

use super::models::ContactMessage;
use crate::config::ContactConfig;
use crate::{Error, Result};

/// Something that can deliver a contact message
#[async_trait::async_trait]
pub trait ContactRelay: Send + Sync {
    /// Relay name for logs and status messages
    fn name(&self) -> &str;

    /// Deliver one message. Validates first; no retries.
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    phone: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_name: Option<&'a str>,
}

/// EmailJS REST relay
pub struct EmailJsRelay {
    client: Client,
    endpoint: Url,
    service_id: String,
    template_id: String,
    public_key: String,
    to_name: Option<String>,
}

impl EmailJsRelay {
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let missing = |field: &str| {
            Error::Config(format!("contact.{field} is required to send messages"))
        };
        let service_id = config.service_id.clone().ok_or_else(|| missing("service_id"))?;
        let template_id = config.template_id.clone().ok_or_else(|| missing("template_id"))?;
        let public_key = config.public_key.clone().ok_or_else(|| missing("public_key"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: Url::parse(&config.endpoint)?,
            service_id,
            template_id,
            public_key,
            to_name: config.to_name.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ContactRelay for EmailJsRelay {
    fn name(&self) -> &str {
        "emailjs"
    }

    async fn send(&self, message: &ContactMessage) -> Result<()> {
        message.validate()?;

        let request = EmailJsRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                from_name: &message.name,
                from_email: &message.email,
                phone: message.phone.as_deref().unwrap_or(""),
                message: &message.message,
                to_name: self.to_name.as_deref(),
            },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Relay(format!("request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            info!(relay = self.name(), "contact message sent");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(relay = self.name(), %status, "contact relay rejected message");
        Err(Error::Relay(format!("{}: {}", status, body.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ContactConfig {
        ContactConfig {
            endpoint: format!("{}/api/v1.0/email/send", server.uri()),
            service_id: Some("service_test".to_string()),
            template_id: Some("template_test".to_string()),
            public_key: Some("pk_test".to_string()),
            to_name: Some("Alex".to_string()),
            timeout_secs: 5,
        }
    }

    fn message() -> ContactMessage {
        ContactMessage::new("Dana", "dana@example.com", None, "Hi Alex, let's talk.")
    }

    #[tokio::test]
    async fn test_send_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_partial_json(serde_json::json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "pk_test",
                "template_params": {
                    "from_name": "Dana",
                    "from_email": "dana@example.com",
                    "phone": "",
                    "to_name": "Alex"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(&config_for(&server)).unwrap();
        relay.send(&message()).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_failure_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("The Public Key is invalid"))
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(&config_for(&server)).unwrap();
        let err = relay.send(&message()).await.unwrap_err();
        match err {
            Error::Relay(reason) => assert!(reason.contains("Public Key is invalid")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_message_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(&config_for(&server)).unwrap();
        let bad = ContactMessage::new("Dana", "not-an-email", None, "hello");
        assert!(matches!(relay.send(&bad).await, Err(Error::InvalidContact(_))));
    }

    #[test]
    fn test_missing_credentials() {
        let config = ContactConfig::default();
        let err = EmailJsRelay::new(&config).err().unwrap();
        assert!(err.to_string().contains("service_id"));
    }
}
