//! Footprint collection handlers
//!
//! CRUD over the parent aggregate. Ownership is authorization by
//! construction: the stored `author` always comes from the authenticated
//! principal, and client-supplied author values are discarded, not merely
//! ignored. Update and delete compare the *stored* author against the
//! current principal inside one atomic store operation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use footprints_auth::Principal;

use crate::api::error::ApiError;
use crate::api::handlers::AppState;
use crate::api::view::FootprintView;
use crate::model::{Footprint, FootprintPatch};
use crate::storage::OwnedMutation;

/// Message returned on ownership violations
pub(crate) const FORBIDDEN_MESSAGE: &str = "You're not allowed to do that!";

/// Request to create a footprint
#[derive(Debug, Deserialize)]
pub struct CreateFootprintRequest {
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Accepted and discarded; ownership comes from the authenticated
    /// principal, never from the body
    #[serde(default)]
    pub author: Option<String>,
}

/// Request to update a footprint (merge semantics)
#[derive(Debug, Deserialize)]
pub struct UpdateFootprintRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Accepted and discarded; the stored author is immutable
    #[serde(default)]
    pub author: Option<String>,
}

impl From<UpdateFootprintRequest> for FootprintPatch {
    fn from(request: UpdateFootprintRequest) -> Self {
        FootprintPatch {
            title: request.title,
            location: request.location,
            description: request.description,
        }
    }
}

/// List all footprints, newest first, authors hydrated
///
/// GET /footprints
pub async fn list_footprints(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FootprintView>>, ApiError> {
    let footprints = state.store.list_footprints().await?;
    let principals = load_authors(state.as_ref(), &footprints).await?;

    Ok(Json(
        footprints
            .into_iter()
            .map(|footprint| FootprintView::hydrate(footprint, &principals))
            .collect(),
    ))
}

/// Fetch one footprint, author hydrated
///
/// GET /footprints/{id}
pub async fn get_footprint(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FootprintView>, ApiError> {
    let footprint = state
        .store
        .get_footprint(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    let principals = load_authors(state.as_ref(), std::slice::from_ref(&footprint)).await?;
    Ok(Json(FootprintView::hydrate(footprint, &principals)))
}

/// Create a footprint owned by the current principal
///
/// POST /footprints
pub async fn create_footprint(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateFootprintRequest>,
) -> Result<(StatusCode, Json<FootprintView>), ApiError> {
    if let Some(claimed) = &request.author {
        if claimed != &principal.id {
            debug!(claimed = %claimed, "Discarding client-supplied author");
        }
    }

    let mut footprint = Footprint::new(&principal.id, request.title);
    footprint.location = request.location;
    footprint.description = request.description;

    let stored = state.store.insert_footprint(footprint).await?;

    info!(footprint = %stored.id, author = %principal.id, "Created footprint");
    Ok((
        StatusCode::CREATED,
        Json(FootprintView::resolved(stored, principal)),
    ))
}

/// Update a footprint; owner only
///
/// PUT /footprints/{id}
pub async fn update_footprint(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    Json(request): Json<UpdateFootprintRequest>,
) -> Result<Json<FootprintView>, ApiError> {
    let outcome = state
        .store
        .update_footprint(&id, &principal.id, request.into())
        .await?;

    match outcome {
        OwnedMutation::Applied(updated) => {
            info!(footprint = %id, author = %principal.id, "Updated footprint");
            Ok(Json(FootprintView::resolved(updated, principal)))
        }
        OwnedMutation::Forbidden { stored_author } => {
            warn!(
                footprint = %id,
                owner = %stored_author,
                principal = %principal.id,
                "Rejected footprint update"
            );
            Err(ApiError::Forbidden(FORBIDDEN_MESSAGE.into()))
        }
        OwnedMutation::Missing => Err(not_found(&id)),
    }
}

/// Delete a footprint; owner only. Returns the removed aggregate's prior
/// state.
///
/// DELETE /footprints/{id}
pub async fn delete_footprint(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<FootprintView>, ApiError> {
    let outcome = state.store.delete_footprint(&id, &principal.id).await?;

    match outcome {
        OwnedMutation::Applied(removed) => {
            info!(footprint = %id, author = %principal.id, "Deleted footprint");
            Ok(Json(FootprintView::resolved(removed, principal)))
        }
        OwnedMutation::Forbidden { stored_author } => {
            warn!(
                footprint = %id,
                owner = %stored_author,
                principal = %principal.id,
                "Rejected footprint delete"
            );
            Err(ApiError::Forbidden(FORBIDDEN_MESSAGE.into()))
        }
        OwnedMutation::Missing => Err(not_found(&id)),
    }
}

pub(crate) fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Footprint not found: {}", id))
}

/// Join the principal directory for every distinct footprint author
async fn load_authors(
    state: &AppState,
    footprints: &[Footprint],
) -> Result<HashMap<String, Principal>, ApiError> {
    let mut principals = HashMap::new();
    for footprint in footprints {
        if principals.contains_key(&footprint.author) {
            continue;
        }
        if let Some(principal) = state.store.get_principal(&footprint.author).await? {
            principals.insert(footprint.author.clone(), principal);
        }
    }
    Ok(principals)
}
