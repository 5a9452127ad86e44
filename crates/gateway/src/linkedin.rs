//! LinkedIn OAuth handshake, profile lookup and UGC post publishing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::capabilities::{Connection, IdentityProvider, Profile, PublishReceipt, Publisher};
use crate::config::LinkedInConfig;
use crate::error::{ensure_success, require, GatewayError, GatewayResult};

const SERVICE: &str = "linkedin";

/// Scopes requested during authorization.
pub const SCOPES: &str = "openid profile email w_member_social";

/// Token payload returned by the access token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

/// LinkedIn API client.
pub struct LinkedInClient {
    config: LinkedInConfig,
    client: reqwest::Client,
}

impl LinkedInClient {
    #[must_use]
    pub fn new(config: LinkedInConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LinkedInConfig::default())
    }

    fn client_id(&self) -> GatewayResult<&str> {
        self.config
            .client_id
            .as_deref()
            .ok_or(GatewayError::NotConfigured("LINKEDIN_CLIENT_ID"))
    }

    fn client_secret(&self) -> GatewayResult<&str> {
        self.config
            .client_secret
            .as_deref()
            .ok_or(GatewayError::NotConfigured("LINKEDIN_CLIENT_SECRET"))
    }

    /// Authorization URL the member is sent to. A random `state` is
    /// generated when none is given.
    pub fn authorize_url(&self, state: Option<&str>) -> GatewayResult<String> {
        let client_id = self.client_id()?;
        let state = state.map_or_else(|| uuid::Uuid::new_v4().simple().to_string(), String::from);

        Ok(format!(
            "{}/authorization?response_type=code&client_id={}&redirect_uri={}&state={}&scope={}",
            self.config.oauth_base,
            urlencoding::encode(client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode(&state),
            urlencoding::encode(SCOPES),
        ))
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> GatewayResult<AccessToken> {
        let code = require("code", code)?;
        let client_id = self.client_id()?;
        let client_secret = self.client_secret()?;

        debug!(service = SERVICE, "Exchanging authorization code");

        let response = self
            .client
            .post(format!("{}/accessToken", self.config.oauth_base))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let token: AccessToken = ensure_success(SERVICE, response).await?.json().await?;
        info!(service = SERVICE, "Token exchange successful");
        Ok(token)
    }

    /// Fetch the member profile for `access_token`.
    pub async fn fetch_profile(&self, access_token: &str) -> GatewayResult<Profile> {
        let access_token = require("access token", access_token)?;

        let response = self
            .client
            .get(format!("{}/userinfo", self.config.api_base))
            .bearer_auth(access_token)
            .send()
            .await?;

        let profile: Profile = ensure_success(SERVICE, response).await?.json().await?;
        debug!(service = SERVICE, sub = %profile.sub, "Fetched profile");
        Ok(profile)
    }

    /// Publish `text` as the member identified by `person_urn`, looking the
    /// member up first when no URN is known.
    pub async fn publish_as(
        &self,
        text: &str,
        access_token: &str,
        person_urn: Option<&str>,
    ) -> GatewayResult<PublishReceipt> {
        if text.trim().is_empty() {
            return Err(GatewayError::MissingField("text"));
        }
        if access_token.trim().is_empty() {
            return Err(GatewayError::NotConnected);
        }

        let author = match person_urn.map(str::trim).filter(|u| !u.is_empty()) {
            Some(urn) => urn.to_string(),
            None => self.fetch_profile(access_token).await?.person_urn(),
        };

        debug!(service = SERVICE, author = %author, chars = text.chars().count(), "Publishing post");

        let response = self
            .client
            .post(format!("{}/ugcPosts", self.config.api_base))
            .bearer_auth(access_token)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .json(&ugc_post_body(&author, text))
            .send()
            .await?;

        let response = ensure_success(SERVICE, response).await?;
        let header_id = response
            .headers()
            .get("x-restli-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body: Value = response.json().await.unwrap_or(Value::Null);

        let post_id = body
            .get("id")
            .and_then(Value::as_str)
            .map(String::from)
            .or(header_id)
            .ok_or_else(|| GatewayError::Decode {
                service: SERVICE,
                reason: "response carried no post id".to_string(),
            })?;

        info!(service = SERVICE, post_id = %post_id, "Post published");
        Ok(PublishReceipt { post_id })
    }
}

/// UGC share body for a text-only public post.
pub fn ugc_post_body(author: &str, text: &str) -> Value {
    json!({
        "author": author,
        "lifecycleState": "PUBLISHED",
        "specificContent": {
            "com.linkedin.ugc.ShareContent": {
                "shareCommentary": { "text": text },
                "shareMediaCategory": "NONE"
            }
        },
        "visibility": {
            "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
        }
    })
}

#[async_trait]
impl IdentityProvider for LinkedInClient {
    async fn connect(&self, code: &str) -> GatewayResult<Connection> {
        let token = self.exchange_code(code).await?;
        let profile = self.fetch_profile(&token.access_token).await?;
        info!(service = SERVICE, name = %profile.name, "Connected");
        Ok(Connection::new(token.access_token).with_profile(profile))
    }
}

#[async_trait]
impl Publisher for LinkedInClient {
    async fn publish(&self, text: &str, connection: &Connection) -> GatewayResult<PublishReceipt> {
        self.publish_as(
            text,
            &connection.access_token,
            connection.person_urn().as_deref(),
        )
        .await
    }
}
