//! HTTP implementation of the platform gateway.
//!
//! Two endpoints matter to this client:
//! - `POST {base}/session/sign-out` — the Session Termination Gateway.
//!   Success is any 2xx; the body is ignored.
//! - `GET {base}/quests` — the quest feed, a JSON envelope of quests.
//!
//! Both authenticate with a bearer token. The base URL is injectable so
//! integration tests can point at a mock server.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::gateway::{GatewayError, PlatformGateway};
use super::types::{Quest, QuestFeed};

pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// `base_url` should not end with a trailing slash.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PlatformGateway for HttpGateway {
    fn name(&self) -> &str {
        "platform-http"
    }

    async fn sign_out(&self, token: &str) -> Result<(), GatewayError> {
        let url = self.endpoint("/session/sign-out");
        info!("Signing out via {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Sign-out returned HTTP {}: {}", status.as_u16(), message);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Sign-out acknowledged (HTTP {})", status.as_u16());
        Ok(())
    }

    async fn fetch_quests(&self, token: &str) -> Result<Vec<Quest>, GatewayError> {
        if token.is_empty() {
            return Err(GatewayError::Config(String::from(
                "missing API token (config file or LOUNGE_API_TOKEN env var)",
            )));
        }

        let url = self.endpoint("/quests");
        debug!("Fetching quests from {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let feed: QuestFeed = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        info!("Fetched {} quests", feed.quests.len());
        Ok(feed.quests)
    }
}
