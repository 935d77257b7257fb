//! End-to-end tests driving the router in-process.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use continuity_core::{ProviderError, QueryResolver};
use continuity_memory::{FileKnowledgeStore, KnowledgeStore, MemoryRecord};
use continuity_server::routes::{ErrorReply, MessageReply, QueryReply};
use continuity_server::{AppState, router};
use continuity_test_utils::{FailingLLM, FailingStore, FixedLLM, InMemoryStore, SlowLLM};
use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;
use tower::ServiceExt;

fn app(resolver: QueryResolver) -> Router {
    router(Arc::new(AppState::new(resolver)))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn send<T: DeserializeOwned>(app: Router, request: Request<Body>) -> (StatusCode, T) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

/// Root reports liveness and the provider name.
#[tokio::test]
async fn root_reports_liveness() {
    let app = app(QueryResolver::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(FixedLLM::new("unused")),
    ));
    let request = Request::builder().uri("/").body(Body::empty()).expect("request");

    let (status, reply): (_, MessageReply) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.message, "AI Knowledge Continuity Agent (Stub) is running");
}

/// Added memories are persisted and then served by /query.
#[tokio::test]
async fn add_memory_then_query_hits_memory() {
    let temp = tempdir().expect("tempdir");
    let store = Arc::new(FileKnowledgeStore::new(temp.path().join("memory.json")).expect("store"));
    let app = app(QueryResolver::new(
        store.clone(),
        Arc::new(FailingLLM::transport("should not be called")),
    ));

    let (status, reply): (_, MessageReply) = send(
        app.clone(),
        post_json("/add_memory", r#"{"issue": "vpn", "solution": "Reinstall the client."}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.message, "Memory added successfully");

    let (status, reply): (_, QueryReply) = send(
        app,
        post_json("/query", r#"{"question": "My VPN keeps dropping"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        reply,
        QueryReply {
            response: "Reinstall the client.".to_string(),
            context: "Found in memory: vpn".to_string(),
        }
    );
    assert_eq!(store.load_all().await.expect("load").len(), 1);
}

/// A memory miss is generated, returned and learned.
#[tokio::test]
async fn query_miss_generates_and_learns() {
    let store = Arc::new(InMemoryStore::new());
    let app = app(QueryResolver::new(store.clone(), Arc::new(FixedLLM::new("stub answer"))));

    let (status, reply): (_, QueryReply) =
        send(app, post_json("/query", r#"{"question": "new question"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.response, "stub answer");
    assert_eq!(reply.context, "Generated and learned from Stub");
    assert_eq!(
        store.snapshot(),
        vec![MemoryRecord::new("new question", "stub answer")]
    );
}

/// Provider failures become 502 error replies and learn nothing.
#[tokio::test]
async fn provider_failure_is_bad_gateway() {
    let store = Arc::new(InMemoryStore::new());
    let app = app(QueryResolver::new(
        store.clone(),
        Arc::new(FailingLLM::new(ProviderError::Quota("exhausted".to_string()))),
    ));

    let (status, reply): (_, ErrorReply) =
        send(app, post_json("/query", r#"{"question": "printer jam"}"#)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(reply.error.contains("quota exceeded"));
    assert!(store.snapshot().is_empty());
}

/// Provider timeouts become 504 error replies.
#[tokio::test]
async fn provider_timeout_is_gateway_timeout() {
    let resolver = QueryResolver::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(SlowLLM::new(Duration::from_secs(5), "too late")),
    )
    .with_timeout(Some(Duration::from_millis(20)));

    let (status, reply): (_, ErrorReply) =
        send(app(resolver), post_json("/query", r#"{"question": "slow"}"#)).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert!(reply.error.contains("timed out"));
}

/// Bad input is rejected with a 400 error reply.
#[tokio::test]
async fn invalid_input_is_bad_request() {
    let app = app(QueryResolver::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(FixedLLM::new("unused")),
    ));

    let (status, reply): (_, ErrorReply) =
        send(app.clone(), post_json("/query", r#"{"question": "  "}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.error, "question cannot be empty");

    let (status, _): (_, ErrorReply) =
        send(app.clone(), post_json("/query", r#"{"prompt": "wrong key"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, reply): (_, ErrorReply) = send(
        app,
        post_json("/add_memory", r#"{"issue": "wifi", "solution": ""}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(reply.error.contains("solution"));
}

/// Storage failures become 500 error replies without killing the service.
#[tokio::test]
async fn storage_failure_is_internal_error() {
    let app = app(QueryResolver::new(
        Arc::new(FailingStore),
        Arc::new(FixedLLM::new("answer")),
    ));

    let (status, reply): (_, ErrorReply) = send(
        app.clone(),
        post_json("/add_memory", r#"{"issue": "wifi", "solution": "toggle"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(reply.error.contains("disk unavailable"));

    let (status, _): (_, ErrorReply) =
        send(app, post_json("/query", r#"{"question": "wifi"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
