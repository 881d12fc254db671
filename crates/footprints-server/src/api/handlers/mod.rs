//! API request handlers

pub mod comments;
pub mod footprints;

use footprints_auth::TokenVerifier;
use std::sync::Arc;

use crate::storage::FootprintStore;

pub use comments::{
    create_comment, delete_comment, update_comment, AckResponse, CreateCommentRequest,
    UpdateCommentRequest,
};
pub use footprints::{
    create_footprint, delete_footprint, get_footprint, list_footprints, update_footprint,
    CreateFootprintRequest, UpdateFootprintRequest,
};

/// How comment mutations are authorized
///
/// Footprint update/delete are always ownership-checked; comment mutation
/// historically was not. That asymmetry is kept as the default and exposed
/// here as an explicit policy switch rather than silently patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentOwnership {
    /// Any authenticated principal may update or delete any comment
    #[default]
    Open,
    /// Comment update/delete require the comment's stored author
    Enforced,
}

impl std::str::FromStr for CommentOwnership {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(CommentOwnership::Open),
            "enforced" => Ok(CommentOwnership::Enforced),
            _ => Err(format!("Unknown comment ownership policy: {}", s)),
        }
    }
}

/// Service configuration
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Authorization policy for comment update/delete
    pub comment_ownership: CommentOwnership,
}

/// Application state shared across handlers
pub struct AppState {
    /// Credential verifier capability
    pub verifier: Arc<dyn TokenVerifier>,
    /// Aggregate store
    pub store: Arc<dyn FootprintStore>,
    /// Service configuration
    pub config: ServiceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_ownership_parsing() {
        assert_eq!(
            "open".parse::<CommentOwnership>().unwrap(),
            CommentOwnership::Open
        );
        assert_eq!(
            "Enforced".parse::<CommentOwnership>().unwrap(),
            CommentOwnership::Enforced
        );
        assert!("strict".parse::<CommentOwnership>().is_err());
    }
}
