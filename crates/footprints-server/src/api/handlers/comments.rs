//! Comment sub-resource handlers
//!
//! Comments are embedded in their parent footprint and mutated only through
//! atomic operations on the whole aggregate. Appending requires no ownership
//! check - any authenticated principal may comment on any footprint. Update
//! and delete follow the configured [`CommentOwnership`] policy.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use footprints_auth::Principal;

use crate::api::error::ApiError;
use crate::api::handlers::footprints::{not_found, FORBIDDEN_MESSAGE};
use crate::api::handlers::{AppState, CommentOwnership};
use crate::api::view::CommentView;
use crate::model::Comment;
use crate::storage::CommentMutation;

/// Request to append a comment
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
    /// Accepted and discarded; the comment author is always the
    /// authenticated principal
    #[serde(default)]
    pub author: Option<String>,
}

/// Request to update a comment; only `text` is mutable
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
}

/// Generic acknowledgment for comment mutations
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    fn ok() -> Self {
        Self {
            message: "Ok".into(),
        }
    }
}

/// Append a comment to a footprint
///
/// POST /footprints/{id}/comments
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentView>), ApiError> {
    if let Some(claimed) = &request.author {
        if claimed != &principal.id {
            debug!(claimed = %claimed, "Discarding client-supplied comment author");
        }
    }

    let comment = Comment::new(&principal.id, request.text);
    let appended = state
        .store
        .push_comment(&id, comment)
        .await?
        .ok_or_else(|| not_found(&id))?;

    info!(
        footprint = %id,
        comment = %appended.id,
        author = %principal.id,
        "Appended comment"
    );
    Ok((
        StatusCode::CREATED,
        Json(CommentView::resolved(appended, principal)),
    ))
}

/// Update a comment's text
///
/// PUT /footprints/{id}/comments/{comment_id}
pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path((id, comment_id)): Path<(String, String)>,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    let outcome = state
        .store
        .update_comment_text(
            &id,
            &comment_id,
            required_author(&state, &principal),
            &request.text,
        )
        .await?;

    match outcome {
        CommentMutation::Applied => {
            info!(footprint = %id, comment = %comment_id, "Updated comment");
            Ok(Json(AckResponse::ok()))
        }
        CommentMutation::Forbidden { stored_author } => {
            warn!(
                footprint = %id,
                comment = %comment_id,
                owner = %stored_author,
                principal = %principal.id,
                "Rejected comment update"
            );
            Err(ApiError::Forbidden(FORBIDDEN_MESSAGE.into()))
        }
        CommentMutation::CommentMissing => Err(ApiError::NotFound(format!(
            "Comment not found: {}",
            comment_id
        ))),
        CommentMutation::FootprintMissing => Err(not_found(&id)),
    }
}

/// Remove a comment by id; idempotent
///
/// DELETE /footprints/{id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<AckResponse>, ApiError> {
    let outcome = state
        .store
        .remove_comment(&id, &comment_id, required_author(&state, &principal))
        .await?;

    match outcome {
        CommentMutation::Applied => {
            info!(footprint = %id, comment = %comment_id, "Removed comment");
            Ok(Json(AckResponse::ok()))
        }
        // Removal by id is idempotent: an absent comment is still success
        CommentMutation::CommentMissing => Ok(Json(AckResponse::ok())),
        CommentMutation::Forbidden { stored_author } => {
            warn!(
                footprint = %id,
                comment = %comment_id,
                owner = %stored_author,
                principal = %principal.id,
                "Rejected comment delete"
            );
            Err(ApiError::Forbidden(FORBIDDEN_MESSAGE.into()))
        }
        CommentMutation::FootprintMissing => Err(not_found(&id)),
    }
}

fn required_author<'a>(state: &AppState, principal: &'a Principal) -> Option<&'a str> {
    match state.config.comment_ownership {
        CommentOwnership::Open => None,
        CommentOwnership::Enforced => Some(principal.id.as_str()),
    }
}
