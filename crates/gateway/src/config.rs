//! Gateway configuration from environment variables.

use std::env;

/// Default LinkedIn REST API base.
pub const DEFAULT_LINKEDIN_API_BASE: &str = "https://api.linkedin.com/v2";

/// Default LinkedIn OAuth base.
pub const DEFAULT_LINKEDIN_OAUTH_BASE: &str = "https://www.linkedin.com/oauth/v2";

/// Default OAuth redirect target (the studio service's auth endpoint).
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8787/functions/v1/linkedin-auth";

/// Default Resend API base.
pub const DEFAULT_RESEND_API_BASE: &str = "https://api.resend.com";

/// Default sender for outgoing e-mail.
pub const DEFAULT_EMAIL_FROM: &str = "LinkedIn Post Generator <onboarding@resend.dev>";

/// LinkedIn application settings.
#[derive(Debug, Clone)]
pub struct LinkedInConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub api_base: String,
    pub oauth_base: String,
}

impl Default for LinkedInConfig {
    fn default() -> Self {
        Self {
            client_id: non_empty_var("LINKEDIN_CLIENT_ID"),
            client_secret: non_empty_var("LINKEDIN_CLIENT_SECRET"),
            redirect_uri: env::var("LINKEDIN_REDIRECT_URI")
                .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string()),
            api_base: env::var("LINKEDIN_API_BASE")
                .unwrap_or_else(|_| DEFAULT_LINKEDIN_API_BASE.to_string()),
            oauth_base: env::var("LINKEDIN_OAUTH_BASE")
                .unwrap_or_else(|_| DEFAULT_LINKEDIN_OAUTH_BASE.to_string()),
        }
    }
}

/// Resend e-mail settings.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub default_from: String,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: non_empty_var("RESEND_API_KEY"),
            api_base: env::var("RESEND_API_BASE")
                .unwrap_or_else(|_| DEFAULT_RESEND_API_BASE.to_string()),
            default_from: env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_string()),
        }
    }
}

/// Configuration for every gateway.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    pub linkedin: LinkedInConfig,
    pub resend: ResendConfig,
    /// Remote generation endpoint; local generation is used when unset.
    pub generation_url: Option<String>,
}

impl GatewayConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `LINKEDIN_CLIENT_ID`, `LINKEDIN_CLIENT_SECRET`: OAuth application
    /// - `LINKEDIN_REDIRECT_URI`: OAuth redirect (default: local studio)
    /// - `LINKEDIN_API_BASE`, `LINKEDIN_OAUTH_BASE`: endpoint overrides
    /// - `RESEND_API_KEY`: enables e-mail
    /// - `RESEND_API_BASE`, `EMAIL_FROM`: e-mail overrides
    /// - `GENERATION_URL`: remote generation endpoint
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            linkedin: LinkedInConfig::default(),
            resend: ResendConfig::default(),
            generation_url: non_empty_var("GENERATION_URL"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
