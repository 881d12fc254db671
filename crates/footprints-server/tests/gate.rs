//! Authorization Gate Tests
//!
//! Full-router tests over the HTTP surface:
//! - Requests without a valid bearer credential are rejected with 401
//!   before any store access
//! - The gate records the resolved principal in the directory, so list/get
//!   responses resolve author references through the service's own flow

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use footprints_auth::{MockVerifier, Principal};
use footprints_server::{create_router, AppState, FootprintStore, MemoryStore, ServiceConfig};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_state() -> Arc<AppState> {
    Arc::new(AppState {
        verifier: Arc::new(
            MockVerifier::new().with_principal("alice-token", Principal::new("u-1", "alice")),
        ),
        store: Arc::new(MemoryStore::new()),
        config: ServiceConfig::default(),
    })
}

fn post_footprint(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/footprints")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(r#"{"title":"Hike"}"#)).unwrap()
}

fn get(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Rejection Before Store Access
// =============================================================================

#[tokio::test]
async fn test_missing_credential_rejected_before_store_access() {
    let state = test_state();
    let app = create_router(state.clone());

    let response = app.oneshot(post_footprint(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");

    // The rejected mutation never reached the store
    assert!(state.store.list_footprints().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_scheme_rejected() {
    let state = test_state();
    let app = create_router(state.clone());

    let response = app.oneshot(post_footprint(Some("Basic abc"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(state.store.list_footprints().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_verification_rejected() {
    let state = test_state();
    let app = create_router(state.clone());

    let response = app
        .oneshot(post_footprint(Some("Bearer FAIL:token expired")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");

    assert!(state.store.list_footprints().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reads_are_gated_too() {
    let state = test_state();
    let app = create_router(state.clone());

    let response = app
        .oneshot(Request::builder().uri("/footprints").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = create_router(test_state());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// Directory Recording
// =============================================================================

#[tokio::test]
async fn test_authenticated_principal_resolves_in_responses() {
    let state = test_state();
    let app = create_router(state.clone());

    let response = app
        .clone()
        .oneshot(post_footprint(Some("Bearer alice-token")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    // No manual directory seeding: the gate recorded alice on the way in,
    // so the list join resolves her full record
    let response = app
        .clone()
        .oneshot(get("/footprints", "Bearer alice-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["author"]["id"], "u-1");
    assert_eq!(body[0]["author"]["username"], "alice");

    // Same for a single fetch
    let response = app
        .oneshot(get(&format!("/footprints/{}", id), "Bearer alice-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["author"]["username"], "alice");
}
