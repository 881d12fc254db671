//! Authorization gate
//!
//! Every footprint route requires a resolved principal. The gate wraps the
//! whole protected router uniformly: it extracts the bearer credential,
//! resolves it through the verifier capability, and injects the principal
//! into request extensions before any handler or store access runs. It also
//! records the resolved principal in the directory, which is what makes
//! author hydration joins resolve for everyone who has authenticated.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::api::handlers::AppState;

/// Middleware that rejects requests without a valid bearer credential
pub async fn require_principal(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer credential".into()))?;

    let principal = state.verifier.verify(&token).await.map_err(|e| {
        warn!(error = %e, "Rejected request credential");
        ApiError::Unauthorized(e.to_string())
    })?;

    debug!(principal = %principal.id, "Resolved principal");

    // Keep the directory current so author joins resolve this principal
    state.store.put_principal(principal.clone()).await?;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
