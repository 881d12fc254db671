//! In-memory storage backend
//!
//! Default storage implementation. Suitable for development and
//! single-instance deployments; data is lost on restart. A single `RwLock`
//! guards the footprint collection, which makes every trait method one
//! atomic unit against the aggregates.

use async_trait::async_trait;
use footprints_auth::Principal;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::info;

use super::{CommentMutation, FootprintStore, OwnedMutation, StoreError};
use crate::model::{Comment, Footprint, FootprintPatch};

/// In-memory footprint store
///
/// Footprints live in an insertion-ordered `Vec` so that listing has a
/// deterministic tie-break (newest insertion first) when creation timestamps
/// collide.
#[derive(Debug)]
pub struct MemoryStore {
    footprints: RwLock<Vec<Footprint>>,
    principals: RwLock<HashMap<String, Principal>>,
}

impl MemoryStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            footprints: RwLock::new(Vec::new()),
            principals: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FootprintStore for MemoryStore {
    // =========================================================================
    // Footprint Aggregates
    // =========================================================================

    async fn insert_footprint(&self, footprint: Footprint) -> Result<Footprint, StoreError> {
        let mut footprints = self.footprints.write().unwrap();
        info!(footprint = %footprint.id, author = %footprint.author, "Inserting footprint");
        footprints.push(footprint.clone());
        Ok(footprint)
    }

    async fn list_footprints(&self) -> Result<Vec<Footprint>, StoreError> {
        let footprints = self.footprints.read().unwrap();
        let mut all: Vec<Footprint> = footprints.clone();
        // Reverse before the stable sort so equal timestamps come out
        // newest-insertion-first.
        all.reverse();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn get_footprint(&self, id: &str) -> Result<Option<Footprint>, StoreError> {
        let footprints = self.footprints.read().unwrap();
        Ok(footprints.iter().find(|f| f.id == id).cloned())
    }

    async fn update_footprint(
        &self,
        id: &str,
        author: &str,
        patch: FootprintPatch,
    ) -> Result<OwnedMutation, StoreError> {
        let mut footprints = self.footprints.write().unwrap();
        let Some(footprint) = footprints.iter_mut().find(|f| f.id == id) else {
            return Ok(OwnedMutation::Missing);
        };
        if footprint.author != author {
            return Ok(OwnedMutation::Forbidden {
                stored_author: footprint.author.clone(),
            });
        }
        footprint.apply(patch);
        info!(footprint = %id, "Updated footprint");
        Ok(OwnedMutation::Applied(footprint.clone()))
    }

    async fn delete_footprint(&self, id: &str, author: &str) -> Result<OwnedMutation, StoreError> {
        let mut footprints = self.footprints.write().unwrap();
        let Some(index) = footprints.iter().position(|f| f.id == id) else {
            return Ok(OwnedMutation::Missing);
        };
        if footprints[index].author != author {
            return Ok(OwnedMutation::Forbidden {
                stored_author: footprints[index].author.clone(),
            });
        }
        let removed = footprints.remove(index);
        info!(footprint = %id, "Deleted footprint");
        Ok(OwnedMutation::Applied(removed))
    }

    // =========================================================================
    // Embedded Comments
    // =========================================================================

    async fn push_comment(
        &self,
        id: &str,
        comment: Comment,
    ) -> Result<Option<Comment>, StoreError> {
        let mut footprints = self.footprints.write().unwrap();
        let Some(footprint) = footprints.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        info!(footprint = %id, comment = %comment.id, "Appending comment");
        footprint.comments.push(comment.clone());
        Ok(Some(comment))
    }

    async fn update_comment_text(
        &self,
        id: &str,
        comment_id: &str,
        require_author: Option<&str>,
        text: &str,
    ) -> Result<CommentMutation, StoreError> {
        let mut footprints = self.footprints.write().unwrap();
        let Some(footprint) = footprints.iter_mut().find(|f| f.id == id) else {
            return Ok(CommentMutation::FootprintMissing);
        };
        let Some(comment) = footprint.comments.iter_mut().find(|c| c.id == comment_id) else {
            return Ok(CommentMutation::CommentMissing);
        };
        if let Some(required) = require_author {
            if comment.author != required {
                return Ok(CommentMutation::Forbidden {
                    stored_author: comment.author.clone(),
                });
            }
        }
        comment.text = text.to_string();
        info!(footprint = %id, comment = %comment_id, "Updated comment text");
        Ok(CommentMutation::Applied)
    }

    async fn remove_comment(
        &self,
        id: &str,
        comment_id: &str,
        require_author: Option<&str>,
    ) -> Result<CommentMutation, StoreError> {
        let mut footprints = self.footprints.write().unwrap();
        let Some(footprint) = footprints.iter_mut().find(|f| f.id == id) else {
            return Ok(CommentMutation::FootprintMissing);
        };
        let Some(index) = footprint.comments.iter().position(|c| c.id == comment_id) else {
            return Ok(CommentMutation::CommentMissing);
        };
        if let Some(required) = require_author {
            if footprint.comments[index].author != required {
                return Ok(CommentMutation::Forbidden {
                    stored_author: footprint.comments[index].author.clone(),
                });
            }
        }
        footprint.comments.remove(index);
        info!(footprint = %id, comment = %comment_id, "Removed comment");
        Ok(CommentMutation::Applied)
    }

    // =========================================================================
    // Principal Directory
    // =========================================================================

    async fn put_principal(&self, principal: Principal) -> Result<(), StoreError> {
        let mut principals = self.principals.write().unwrap();
        principals.insert(principal.id.clone(), principal);
        Ok(())
    }

    async fn get_principal(&self, id: &str) -> Result<Option<Principal>, StoreError> {
        let principals = self.principals.read().unwrap();
        Ok(principals.get(id).cloned())
    }
}
