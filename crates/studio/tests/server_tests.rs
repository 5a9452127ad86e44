//! HTTP function tests: a real router on a random port, with LinkedIn and
//! Resend replaced by mock servers.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use composer::SeededRandom;
use gateway::{LinkedInClient, LinkedInConfig, NewsGenerationService, ResendConfig, ResendNotifier};
use serde_json::{json, Value};
use studio::{build_router, AppState};
use tokio::net::TcpListener;
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Harness
// =============================================================================

fn state_for(upstream: &MockServer) -> AppState {
    AppState {
        linkedin: LinkedInClient::new(LinkedInConfig {
            client_id: Some("app-id".to_string()),
            client_secret: Some("app-secret".to_string()),
            redirect_uri: "http://localhost:8787/functions/v1/linkedin-auth".to_string(),
            api_base: format!("{}/v2", upstream.uri()),
            oauth_base: format!("{}/oauth/v2", upstream.uri()),
        }),
        notifier: ResendNotifier::new(ResendConfig {
            api_key: Some("re_test".to_string()),
            api_base: upstream.uri(),
            default_from: "Studio <studio@example.com>".to_string(),
        }),
        generator: Box::new(
            NewsGenerationService::new(SeededRandom::new(7))
                .with_date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()),
        ),
    }
}

/// Start the studio functions on a random port.
async fn start_studio(state: AppState) -> SocketAddr {
    let app = build_router(Arc::new(state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}

async fn post_json(addr: SocketAddr, route: &str, body: &Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/functions/v1/{route}"))
        .json(body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

// =============================================================================
// Health and CORS
// =============================================================================

#[tokio::test]
async fn test_health() {
    let upstream = MockServer::start().await;
    let addr = start_studio(state_for(&upstream)).await;

    let body: Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_preflight_allows_any_origin() {
    let upstream = MockServer::start().await;
    let addr = start_studio(state_for(&upstream)).await;

    let response = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            format!("http://{addr}/functions/v1/send-email"),
        )
        .header("Origin", "https://app.example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization, x-client-info, apikey, content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

// =============================================================================
// Generation
// =============================================================================

#[tokio::test]
async fn test_generate_news_post() {
    let upstream = MockServer::start().await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(
        addr,
        "generate-news-post",
        &json!({ "topics": ["leadership"], "customDetails": "our offsite" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    let post = body["post"].as_str().unwrap();
    assert!(post.contains("From my perspective: our offsite"));
    assert!(post.ends_with("#Leadership #Management"));
    assert!(body["searchQuery"]
        .as_str()
        .unwrap()
        .ends_with("latest news 2024"));
}

#[tokio::test]
async fn test_generate_empty_request_is_bad_request() {
    let upstream = MockServer::start().await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(addr, "generate-news-post", &json!({ "topics": [] })).await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_generate_mistyped_body_is_json_error() {
    let upstream = MockServer::start().await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(addr, "generate-news-post", &json!({ "topics": "ai" })).await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert!(body.get("post").is_none());
}

// =============================================================================
// LinkedIn
// =============================================================================

#[tokio::test]
async fn test_authorize_returns_url() {
    let upstream = MockServer::start().await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(
        addr,
        "linkedin-auth",
        &json!({ "action": "authorize", "state": "s1" }),
    )
    .await;

    assert_eq!(status, 200);
    let url = body["authUrl"].as_str().unwrap();
    assert!(url.starts_with(&format!("{}/oauth/v2/authorization?", upstream.uri())));
    assert!(url.contains("client_id=app-id"));
    assert!(url.contains("state=s1"));
}

#[tokio::test]
async fn test_token_exchange_passes_payload_through() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(
        addr,
        "linkedin-auth",
        &json!({ "action": "token", "code": "abc" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["access_token"], "tok");
    assert_eq!(body["expires_in"], 3600);
}

#[tokio::test]
async fn test_profile_reads_bearer_header() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/userinfo"))
        .and(bearer_token("tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sub": "abc123",
            "name": "Ada Lovelace"
        })))
        .expect(1)
        .mount(&upstream)
        .await;
    let addr = start_studio(state_for(&upstream)).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/functions/v1/linkedin-auth"))
        .bearer_auth("tok")
        .json(&json!({ "action": "profile" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Ada Lovelace");
}

#[tokio::test]
async fn test_profile_without_token_is_unauthorized() {
    let upstream = MockServer::start().await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(addr, "linkedin-auth", &json!({ "action": "profile" })).await;

    assert_eq!(status, 401);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_unknown_action_is_bad_request() {
    let upstream = MockServer::start().await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(addr, "linkedin-auth", &json!({ "action": "refresh" })).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid action: refresh");
}

#[tokio::test]
async fn test_auth_without_action_is_json_error() {
    let upstream = MockServer::start().await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(addr, "linkedin-auth", &json!({ "code": "x" })).await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("action"));
}

#[tokio::test]
async fn test_linkedin_post() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .and(bearer_token("tok"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "urn:li:share:5"})))
        .expect(1)
        .mount(&upstream)
        .await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(
        addr,
        "linkedin-post",
        &json!({
            "text": "Hello network",
            "accessToken": "tok",
            "personUrn": "urn:li:person:abc123"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["postId"], "urn:li:share:5");
}

#[tokio::test]
async fn test_linkedin_post_upstream_failure() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(422).set_body_string("duplicate post"))
        .expect(1)
        .mount(&upstream)
        .await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(
        addr,
        "linkedin-post",
        &json!({
            "text": "Hello network",
            "accessToken": "tok",
            "personUrn": "urn:li:person:abc123"
        }),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "linkedin returned 422: duplicate post");
}

// =============================================================================
// E-mail
// =============================================================================

#[tokio::test]
async fn test_send_email() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(bearer_token("re_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "msg_3"})))
        .expect(1)
        .mount(&upstream)
        .await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(
        addr,
        "send-email",
        &json!({ "to": "ada@example.com", "subject": "Your post", "text": "Hello" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["messageId"], "msg_3");
    assert_eq!(body["message"], "Email sent successfully!");
}

#[tokio::test]
async fn test_send_email_requires_subject() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;
    let addr = start_studio(state_for(&upstream)).await;

    let (status, body) = post_json(addr, "send-email", &json!({ "to": "ada@example.com" })).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "subject is required");
}

#[tokio::test]
async fn test_send_email_malformed_body_is_json_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;
    let addr = start_studio(state_for(&upstream)).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/functions/v1/send-email"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some());
}
