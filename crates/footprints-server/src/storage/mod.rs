//! Storage abstraction for the Footprints service
//!
//! This module provides a trait-based abstraction over the aggregate store,
//! enabling an in-memory (default) backend and persistent backends behind
//! the same seam.
//!
//! Every trait method is a single atomic unit against one aggregate. In
//! particular, the ownership-gated read-modify-write operations compare the
//! *stored* author and apply the mutation inside the same call, so no
//! concurrent mutation of the same aggregate can be observed in between.
//! Comments are embedded in the parent document, never independently
//! addressable rows; appending, retexting, and removing them are atomic
//! whole-aggregate updates.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use footprints_auth::Principal;
use std::fmt::Debug;

use crate::model::{Comment, Footprint, FootprintPatch};

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Outcome of an ownership-gated footprint mutation
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedMutation {
    /// The mutation was applied; carries the resulting aggregate (for
    /// deletes, the prior state of the removed aggregate)
    Applied(Footprint),
    /// The stored author did not match; the aggregate is unmodified
    Forbidden { stored_author: String },
    /// No aggregate with that id
    Missing,
}

/// Outcome of a comment mutation inside a parent aggregate
#[derive(Debug, Clone, PartialEq)]
pub enum CommentMutation {
    /// The mutation was applied
    Applied,
    /// The comment's stored author did not match the required author
    Forbidden { stored_author: String },
    /// The parent exists but holds no comment with that id
    CommentMissing,
    /// No parent aggregate with that id
    FootprintMissing,
}

/// Aggregate store for footprints and the principal directory
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait FootprintStore: Send + Sync + Debug {
    // =========================================================================
    // Footprint Aggregates
    // =========================================================================

    /// Insert a new footprint
    async fn insert_footprint(&self, footprint: Footprint) -> Result<Footprint, StoreError>;

    /// List all footprints, ordered by creation time descending
    async fn list_footprints(&self) -> Result<Vec<Footprint>, StoreError>;

    /// Fetch one footprint by id
    async fn get_footprint(&self, id: &str) -> Result<Option<Footprint>, StoreError>;

    /// Merge a patch over a footprint if `author` matches the stored author
    ///
    /// The author comparison and the merge happen in one atomic step.
    async fn update_footprint(
        &self,
        id: &str,
        author: &str,
        patch: FootprintPatch,
    ) -> Result<OwnedMutation, StoreError>;

    /// Remove a footprint if `author` matches the stored author
    ///
    /// On success the outcome carries the removed aggregate's prior state.
    async fn delete_footprint(&self, id: &str, author: &str) -> Result<OwnedMutation, StoreError>;

    // =========================================================================
    // Embedded Comments
    // =========================================================================

    /// Append a comment to a footprint's sequence
    ///
    /// Returns the appended comment, or `None` when the parent is missing.
    /// The new comment is positioned after all existing ones.
    async fn push_comment(
        &self,
        id: &str,
        comment: Comment,
    ) -> Result<Option<Comment>, StoreError>;

    /// Replace the `text` of one comment, leaving every other field and every
    /// other comment untouched
    ///
    /// When `require_author` is set, the comment's stored author must match
    /// or the outcome is `Forbidden`.
    async fn update_comment_text(
        &self,
        id: &str,
        comment_id: &str,
        require_author: Option<&str>,
        text: &str,
    ) -> Result<CommentMutation, StoreError>;

    /// Remove one comment from a footprint's sequence by id
    ///
    /// An absent comment id yields `CommentMissing` with the sequence
    /// unchanged; callers treat that as success (removal is idempotent).
    async fn remove_comment(
        &self,
        id: &str,
        comment_id: &str,
        require_author: Option<&str>,
    ) -> Result<CommentMutation, StoreError>;

    // =========================================================================
    // Principal Directory
    // =========================================================================

    /// Record a principal for author hydration joins
    async fn put_principal(&self, principal: Principal) -> Result<(), StoreError>;

    /// Fetch a principal by id
    async fn get_principal(&self, id: &str) -> Result<Option<Principal>, StoreError>;
}
