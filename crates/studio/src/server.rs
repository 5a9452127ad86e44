//! HTTP functions called by the authoring front end.
//!
//! Every endpoint takes and returns JSON and answers CORS preflight for any
//! origin. Failures are reported as `{ "success": false, "error": ... }`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use composer::GenerationRequest;
use gateway::{
    EmailRequest, ErrorKind, GatewayConfig, GatewayError, GenerationResponse, GenerationService,
    LinkedInClient, NewsGenerationService, RemoteGenerationService, ResendNotifier,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::error::{StudioError, StudioResult};

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Clients shared by every request.
pub struct AppState {
    pub linkedin: LinkedInClient,
    pub notifier: ResendNotifier,
    pub generator: Box<dyn GenerationService>,
}

impl AppState {
    /// Build clients from `config`. Generation is answered locally unless a
    /// remote endpoint is configured.
    #[must_use]
    pub fn from_config(config: &GatewayConfig) -> Self {
        let generator: Box<dyn GenerationService> = match &config.generation_url {
            Some(url) => {
                info!(url = %url, "Using remote generation service");
                Box::new(RemoteGenerationService::new(url.clone()))
            }
            None => Box::new(NewsGenerationService::default()),
        };

        Self {
            linkedin: LinkedInClient::new(config.linkedin.clone()),
            notifier: ResendNotifier::new(config.resend.clone()),
            generator,
        }
    }
}

impl StudioError {
    fn status(&self) -> StatusCode {
        match (self, self.kind()) {
            (Self::Gateway(GatewayError::NotConnected), _) => StatusCode::UNAUTHORIZED,
            (_, ErrorKind::Validation) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StudioError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }
        (
            status,
            Json(json!({ "success": false, "error": self.to_string() })),
        )
            .into_response()
    }
}

impl From<JsonRejection> for StudioError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

/// Build the HTTP router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/functions/v1/generate-news-post", post(generate_news_post))
        .route("/functions/v1/linkedin-auth", post(linkedin_auth))
        .route("/functions/v1/linkedin-post", post(linkedin_post))
        .route("/functions/v1/send-email", post(send_email))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve the router on `port` until Ctrl-C or SIGTERM.
pub async fn run_server(state: Arc<AppState>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!(port, "Studio functions listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Studio functions stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "studio",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn generate_news_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return generation_failure(&StudioError::from(rejection)),
    };
    info!(topics = ?request.topics, "Generating news post");

    match state.generator.generate(&request).await {
        Ok(post) => Json(GenerationResponse::succeeded(post)).into_response(),
        Err(e) => {
            let e = StudioError::from(e);
            error!(error = %e, "Error generating news post");
            generation_failure(&e)
        }
    }
}

fn generation_failure(e: &StudioError) -> Response {
    (e.status(), Json(GenerationResponse::failed(e.to_string()))).into_response()
}

#[derive(Debug, Deserialize)]
struct AuthRequest {
    action: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

async fn linkedin_auth(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> StudioResult<Json<Value>> {
    let Json(request) = payload?;
    match request.action.as_str() {
        "authorize" => {
            let url = state.linkedin.authorize_url(request.state.as_deref())?;
            Ok(Json(json!({ "authUrl": url })))
        }
        "token" => {
            let code = request.code.as_deref().unwrap_or_default();
            let token = state.linkedin.exchange_code(code).await?;
            Ok(Json(serde_json::to_value(token).unwrap_or_default()))
        }
        "profile" => {
            let token = bearer_token(&headers).ok_or(GatewayError::NotConnected)?;
            let profile = state.linkedin.fetch_profile(token).await?;
            Ok(Json(serde_json::to_value(profile).unwrap_or_default()))
        }
        other => Err(StudioError::validation(format!("Invalid action: {other}"))),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PostRequest {
    text: String,
    access_token: String,
    person_urn: Option<String>,
}

async fn linkedin_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> StudioResult<Json<Value>> {
    let Json(request) = payload?;
    let receipt = state
        .linkedin
        .publish_as(
            &request.text,
            &request.access_token,
            request.person_urn.as_deref(),
        )
        .await?;

    Ok(Json(json!({
        "success": true,
        "postId": receipt.post_id,
        "message": "Post published to LinkedIn successfully!"
    })))
}

async fn send_email(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> StudioResult<Json<Value>> {
    let Json(request) = payload?;
    let receipt = state.notifier.send(&request).await?;

    Ok(Json(json!({
        "success": true,
        "messageId": receipt.message_id,
        "message": "Email sent successfully!"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            StudioError::from(GatewayError::NotConnected).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            StudioError::from(GatewayError::MissingField("to")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StudioError::from(GatewayError::NotConfigured("RESEND_API_KEY")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            StudioError::from(GatewayError::Upstream {
                service: "linkedin",
                status: 403,
                message: String::new(),
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(bearer_token(&headers), Some("abc"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }
}
