//! View-only author hydration
//!
//! Response shaping that replaces `author` id references with the full
//! principal record. This is pure denormalization scoped to a single
//! response: nothing here is ever written back to the store, so stale
//! joined data cannot be persisted by accident.

use chrono::{DateTime, Utc};
use footprints_auth::Principal;
use serde::Serialize;
use std::collections::HashMap;

use crate::model::{Comment, Footprint};

/// An author reference in a response
///
/// The full principal when the directory join resolves, the bare id
/// otherwise - an unresolved join leaves the reference as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuthorView {
    Resolved(Principal),
    Id(String),
}

impl AuthorView {
    fn resolve(author: &str, principals: &HashMap<String, Principal>) -> Self {
        match principals.get(author) {
            Some(principal) => AuthorView::Resolved(principal.clone()),
            None => AuthorView::Id(author.to_string()),
        }
    }
}

/// A comment as returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    pub id: String,
    pub author: AuthorView,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl CommentView {
    /// Shape a freshly appended comment with its author already resolved
    pub fn resolved(comment: Comment, principal: Principal) -> Self {
        Self {
            id: comment.id,
            author: AuthorView::Resolved(principal),
            text: comment.text,
            created_at: comment.created_at,
        }
    }

    /// Shape a comment embedded in a footprint response; embedded comment
    /// authors stay bare ids
    fn embedded(comment: Comment) -> Self {
        Self {
            id: comment.id,
            author: AuthorView::Id(comment.author),
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}

/// A footprint as returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintView {
    pub id: String,
    pub author: AuthorView,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub comments: Vec<CommentView>,
    pub created_at: DateTime<Utc>,
}

impl FootprintView {
    /// Hydrate the footprint's author from a principal directory join
    pub fn hydrate(footprint: Footprint, principals: &HashMap<String, Principal>) -> Self {
        let author = AuthorView::resolve(&footprint.author, principals);
        Self::shape(footprint, author)
    }

    /// Shape a footprint whose author is the principal already at hand
    /// (create/update/delete responses, where the caller is the owner)
    pub fn resolved(footprint: Footprint, principal: Principal) -> Self {
        Self::shape(footprint, AuthorView::Resolved(principal))
    }

    fn shape(footprint: Footprint, author: AuthorView) -> Self {
        Self {
            id: footprint.id,
            author,
            title: footprint.title,
            location: footprint.location,
            description: footprint.description,
            comments: footprint
                .comments
                .into_iter()
                .map(CommentView::embedded)
                .collect(),
            created_at: footprint.created_at,
        }
    }
}
