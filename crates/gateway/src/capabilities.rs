//! Narrow capability traits for the services a post passes through.
//!
//! Each trait has a single method so callers can be tested against fakes.

use async_trait::async_trait;
use composer::GenerationRequest;
use serde::{Deserialize, Serialize};

use crate::error::GatewayResult;

/// Identity returned by the provider's `userinfo` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub sub: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub email: String,
}

impl Profile {
    /// Member URN used as the author of published posts.
    #[must_use]
    pub fn person_urn(&self) -> String {
        format!("urn:li:person:{}", self.sub)
    }
}

/// Result of a successful identity handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl Connection {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            profile: None,
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Author URN, when the profile is already known.
    #[must_use]
    pub fn person_urn(&self) -> Option<String> {
        self.profile
            .as_ref()
            .filter(|p| !p.sub.is_empty())
            .map(Profile::person_urn)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReceipt {
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyReceipt {
    pub message_id: String,
}

/// A post produced by a generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub post: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

/// Completes the authorization handshake for an authorization code.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn connect(&self, code: &str) -> GatewayResult<Connection>;
}

/// Publishes finished text on behalf of a connected member.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, text: &str, connection: &Connection) -> GatewayResult<PublishReceipt>;
}

/// Sends finished text to a recipient address.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str, recipient: &str) -> GatewayResult<NotifyReceipt>;
}

/// Produces a post for a generation request.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> GatewayResult<GeneratedPost>;
}
