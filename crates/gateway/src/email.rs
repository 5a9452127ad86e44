//! E-mail delivery through the Resend API.

use async_trait::async_trait;
use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::capabilities::{NotifyReceipt, Notifier};
use crate::config::ResendConfig;
use crate::error::{ensure_success, require, GatewayError, GatewayResult};

const SERVICE: &str = "resend";

const HTML_TEMPLATE: &str = include_str!("../templates/email.html.hbs");

/// Body text used when neither HTML nor text is supplied.
pub const DEFAULT_TEXT: &str = "Thank you for using LinkedIn Post Generator!";

/// Subject used when a post is sent without one.
pub const DEFAULT_SUBJECT: &str = "Your LinkedIn Post";

/// An outgoing message. Only `to` and `subject` are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Resend API client.
pub struct ResendNotifier {
    config: ResendConfig,
    client: reqwest::Client,
}

impl ResendNotifier {
    #[must_use]
    pub fn new(config: ResendConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a notifier from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ResendConfig::default())
    }

    /// Send `request`, filling in the default sender and HTML body.
    pub async fn send(&self, request: &EmailRequest) -> GatewayResult<NotifyReceipt> {
        let to = require("to", &request.to)?;
        let subject = require("subject", &request.subject)?;
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GatewayError::NotConfigured("RESEND_API_KEY"))?;

        let from = request
            .from
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(&self.config.default_from);
        let html = match request.html.as_deref().filter(|h| !h.trim().is_empty()) {
            Some(html) => html.to_string(),
            None => render_html(request.text.as_deref())?,
        };

        let mut body = json!({
            "from": from,
            "to": [to],
            "subject": subject,
            "html": html,
        });
        if let Some(text) = &request.text {
            body["text"] = json!(text);
        }

        debug!(service = SERVICE, to = %to, subject = %subject, "Sending e-mail");

        let response = self
            .client
            .post(format!("{}/emails", self.config.api_base))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let sent: SendResponse = ensure_success(SERVICE, response).await?.json().await?;
        let message_id = sent.id.unwrap_or_default();

        info!(service = SERVICE, message_id = %message_id, "E-mail sent");
        Ok(NotifyReceipt { message_id })
    }
}

/// Render the default HTML body around `text`.
pub fn render_html(text: Option<&str>) -> GatewayResult<String> {
    let text = text.filter(|t| !t.trim().is_empty()).unwrap_or(DEFAULT_TEXT);
    let handlebars = Handlebars::new();
    Ok(handlebars.render_template(HTML_TEMPLATE, &json!({ "text": text }))?)
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn notify(&self, text: &str, recipient: &str) -> GatewayResult<NotifyReceipt> {
        self.send(&EmailRequest {
            to: recipient.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            html: None,
            text: Some(text.to_string()),
            from: None,
        })
        .await
    }
}
