//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{GatewayError, PlatformGateway, Quest};

/// A no-op gateway for tests that don't need real API calls.
pub struct NoopGateway;

#[async_trait]
impl PlatformGateway for NoopGateway {
    fn name(&self) -> &str {
        "noop"
    }

    async fn sign_out(&self, _token: &str) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn fetch_quests(&self, _token: &str) -> Result<Vec<Quest>, GatewayError> {
        Ok(Vec::new())
    }
}

/// Creates a test App with a NoopGateway, starting at /quests.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopGateway), "/quests".to_string())
}

/// A quest fixture for component tests.
pub fn test_quest(id: &str, title: &str) -> Quest {
    Quest {
        id: id.to_string(),
        title: title.to_string(),
        description: "Do the thing.".to_string(),
        reward: 25,
        image_url: None,
    }
}
