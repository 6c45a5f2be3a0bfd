//! Outbound mail relay.
//!
//! The browser never sees relay credentials: it calls a server function, and
//! the server forwards the message with [`EmailJs`].

use thiserror::Error;

use crate::contact::ContactMessage;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "EMAILJS_PRIVATE_KEY";
pub const ENDPOINT_VAR: &str = "EMAILJS_ENDPOINT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("mail relay is not configured: {0} is missing")]
    NotConfigured(String),
    #[error("couldn't reach mail relay: {0}")]
    Transport(String),
    #[error("mail relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("server error: {0}")]
    Server(String),
}

#[allow(async_fn_in_trait)]
pub trait MailRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub endpoint: String,
}

impl RelayConfig {
    /// Reads the relay settings through `lookup`. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required =
            |key: &str| optional(key).ok_or_else(|| RelayError::NotConfigured(key.to_string()));

        Ok(Self {
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
            private_key: optional(PRIVATE_KEY_VAR),
            endpoint: optional(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }

    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct EmailJs {
    client: reqwest::Client,
    config: RelayConfig,
}

#[cfg(feature = "ssr")]
impl EmailJs {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn payload(&self, message: &ContactMessage) -> serde_json::Value {
        let mut payload = serde_json::json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": message,
        });
        if let Some(key) = &self.config.private_key {
            payload["accessToken"] = serde_json::Value::String(key.clone());
        }
        payload
    }
}

#[cfg(feature = "ssr")]
impl MailRelay for EmailJs {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&self.payload(message))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status: http::StatusCode = res.status();
        if status.is_success() {
            tracing::info!(from = %message.from_email, "contact message relayed");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        tracing::warn!(%status, %body, "mail relay rejected contact message");
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            (SERVICE_ID_VAR, "service_abc"),
            (TEMPLATE_ID_VAR, "template_xyz"),
            (PUBLIC_KEY_VAR, "pk_123"),
        ]
    }

    #[test]
    fn test_config_from_lookup() {
        let config = RelayConfig::from_lookup(lookup_from(&full_env())).unwrap();
        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.template_id, "template_xyz");
        assert_eq!(config.public_key, "pk_123");
        assert_eq!(config.private_key, None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_config_missing_credential() {
        let env = full_env()
            .into_iter()
            .filter(|(k, _)| *k != TEMPLATE_ID_VAR)
            .collect::<Vec<_>>();
        let err = RelayConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert_eq!(err, RelayError::NotConfigured(TEMPLATE_ID_VAR.to_string()));
    }

    #[test]
    fn test_config_blank_credential() {
        let mut env = full_env();
        env[2] = (PUBLIC_KEY_VAR, "   ");
        let err = RelayConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert_eq!(err, RelayError::NotConfigured(PUBLIC_KEY_VAR.to_string()));
    }

    #[test]
    fn test_config_endpoint_override() {
        let mut env = full_env();
        env.push((ENDPOINT_VAR, "http://localhost:9000/send"));
        env.push((PRIVATE_KEY_VAR, "secret"));
        let config = RelayConfig::from_lookup(lookup_from(&env)).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/send");
        assert_eq!(config.private_key.as_deref(), Some("secret"));
    }

    #[cfg(feature = "ssr")]
    mod emailjs {
        use super::*;
        use httpmock::prelude::*;
        use serde_json::json;

        fn message() -> ContactMessage {
            ContactMessage {
                from_name: "Ada".to_string(),
                from_email: "ada@example.com".to_string(),
                message: "Hello there".to_string(),
            }
        }

        fn relay(server: &MockServer) -> EmailJs {
            let endpoint = server.url("/api/v1.0/email/send");
            let mut env: Vec<(&str, &str)> = full_env();
            env.push((ENDPOINT_VAR, endpoint.as_str()));
            EmailJs::new(RelayConfig::from_lookup(lookup_from(&env)).unwrap())
        }

        #[tokio::test]
        async fn test_send_posts_template_payload() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(POST)
                        .path("/api/v1.0/email/send")
                        .json_body(json!({
                            "service_id": "service_abc",
                            "template_id": "template_xyz",
                            "user_id": "pk_123",
                            "template_params": {
                                "from_name": "Ada",
                                "from_email": "ada@example.com",
                                "message": "Hello there"
                            }
                        }));
                    then.status(200).body("OK");
                })
                .await;

            relay(&server).send(&message()).await.unwrap();
            mock.assert_async().await;
        }

        #[tokio::test]
        async fn test_send_maps_rejection() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(POST).path("/api/v1.0/email/send");
                    then.status(400).body("The Public Key is invalid");
                })
                .await;

            let err = relay(&server).send(&message()).await.unwrap_err();
            assert_eq!(
                err,
                RelayError::Rejected {
                    status: 400,
                    body: "The Public Key is invalid".to_string(),
                }
            );
            mock.assert_hits_async(1).await;
        }

        #[tokio::test]
        async fn test_send_transport_error() {
            let config = RelayConfig::from_lookup(lookup_from(&[
                (SERVICE_ID_VAR, "s"),
                (TEMPLATE_ID_VAR, "t"),
                (PUBLIC_KEY_VAR, "p"),
                (ENDPOINT_VAR, "http://127.0.0.1:1/send"),
            ]))
            .unwrap();
            let err = EmailJs::new(config).send(&message()).await.unwrap_err();
            assert!(matches!(err, RelayError::Transport(_)));
        }
    }
}
