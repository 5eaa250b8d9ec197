use std::fmt;

use async_trait::async_trait;

use super::types::Quest;

/// Errors that can occur during gateway operations.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum GatewayError {
    /// Gateway misconfigured (missing token, bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the gateway's response. Not retryable.
    Parse(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Config(msg) => write!(f, "config error: {msg}"),
            GatewayError::Network(msg) => write!(f, "network error: {msg}"),
            GatewayError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GatewayError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// The platform's hosted API, behind a trait so tests can swap in a stub.
///
/// Sign-out is a call-through: the hosted provider invalidates the session
/// and clears its credentials; the client's only obligations afterwards are
/// to drop the local session record and navigate to `/login`, and it does
/// both whether or not this call succeeded.
#[async_trait]
pub trait PlatformGateway: Send + Sync {
    /// Returns the name of the gateway.
    fn name(&self) -> &str;

    /// Ask the hosted identity provider to terminate the session.
    async fn sign_out(&self, token: &str) -> Result<(), GatewayError>;

    /// Fetch the active quest feed for the signed-in account.
    async fn fetch_quests(&self, token: &str) -> Result<Vec<Quest>, GatewayError>;
}
