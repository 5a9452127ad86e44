//! Generation services: a remote endpoint, or local news composition.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use composer::{generate_news_post, GenerationRequest, RandomSource, ThreadRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::capabilities::{GeneratedPost, GenerationService};
use crate::error::{GatewayError, GatewayResult};

const SERVICE: &str = "generation";

/// Wire response of a generation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    #[must_use]
    pub fn succeeded(post: GeneratedPost) -> Self {
        Self {
            success: true,
            post: Some(post.post),
            search_query: post.search_query,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Delegates generation to a remote HTTP endpoint.
pub struct RemoteGenerationService {
    url: String,
    client: reqwest::Client,
}

impl RemoteGenerationService {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GenerationService for RemoteGenerationService {
    async fn generate(&self, request: &GenerationRequest) -> GatewayResult<GeneratedPost> {
        request.validate()?;

        debug!(service = SERVICE, url = %self.url, topics = ?request.topics, "Requesting generation");

        let response = self.client.post(&self.url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(failure(response).await);
        }
        let body: GenerationResponse = response.json().await?;

        if !body.success {
            let message = body.error.unwrap_or_else(|| "unknown error".to_string());
            warn!(service = SERVICE, error = %message, "Generation rejected");
            return Err(GatewayError::Rejected {
                service: SERVICE,
                message,
            });
        }

        let post = body.post.ok_or_else(|| GatewayError::Decode {
            service: SERVICE,
            reason: "response carried no post".to_string(),
        })?;

        info!(service = SERVICE, chars = post.chars().count(), "Generation complete");
        Ok(GeneratedPost {
            post,
            search_query: body.search_query.filter(|q| !q.is_empty()),
        })
    }
}

/// Turn a non-2xx reply into `Upstream`, keeping the endpoint's own `error`
/// message when the body is a failed `GenerationResponse`.
async fn failure(response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    warn!(service = SERVICE, status = %status, body = %body, "Upstream request failed");

    let message = serde_json::from_str::<GenerationResponse>(&body)
        .ok()
        .and_then(|r| r.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or(body);

    GatewayError::Upstream {
        service: SERVICE,
        status: status.as_u16(),
        message,
    }
}

/// Answers generation requests locally with a simulated-news post.
pub struct NewsGenerationService {
    rng: Mutex<Box<dyn RandomSource + Send>>,
    today: Option<NaiveDate>,
}

impl Default for NewsGenerationService {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}

impl NewsGenerationService {
    pub fn new(rng: impl RandomSource + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
            today: None,
        }
    }

    /// Pin the date used for headlines instead of today's.
    #[must_use]
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

#[async_trait]
impl GenerationService for NewsGenerationService {
    async fn generate(&self, request: &GenerationRequest) -> GatewayResult<GeneratedPost> {
        request.validate()?;
        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());

        let news = {
            let mut rng = self.rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            generate_news_post(request, today, rng.as_mut())?
        };

        debug!(service = SERVICE, query = %news.search_query, "Composed news post");
        Ok(GeneratedPost {
            post: news.post,
            search_query: Some(news.search_query).filter(|q| !q.is_empty()),
        })
    }
}
