//! Domain model: footprints and their embedded comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment embedded in exactly one footprint's ordered sequence
///
/// Comments have no independent lifecycle: they are created, updated, and
/// destroyed only through operations on the parent aggregate. The id is
/// assigned at insertion and stable thereafter; ordering is append-only and
/// removal does not renumber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique within the parent sequence
    pub id: String,
    /// Principal id of the comment's author; never client-supplied
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment authored by the given principal
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// The parent aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub id: String,
    /// Principal id of the owner; immutable after creation
    pub author: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Embedded comment sequence, ordered by insertion
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Footprint {
    /// Create a footprint owned by the given principal
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            title: title.into(),
            location: None,
            description: None,
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Merge a patch over this aggregate
    ///
    /// Fields present in the patch replace the stored values; absent fields
    /// are untouched. `author`, `comments`, and `created_at` are not
    /// patchable.
    pub fn apply(&mut self, patch: FootprintPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

/// Partial update over a footprint's domain payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FootprintPatch {
    pub title: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_replaces_present_fields_only() {
        let mut footprint = Footprint::new("u-1", "Hike").with_location("Trailhead");

        footprint.apply(FootprintPatch {
            title: Some("Hike2".into()),
            ..Default::default()
        });

        assert_eq!(footprint.title, "Hike2");
        assert_eq!(footprint.location.as_deref(), Some("Trailhead"));
        assert!(footprint.description.is_none());
    }

    #[test]
    fn test_patch_never_touches_ownership_or_comments() {
        let mut footprint = Footprint::new("u-1", "Hike");
        footprint.comments.push(Comment::new("u-2", "nice"));
        let before_author = footprint.author.clone();
        let before_comments = footprint.comments.clone();

        footprint.apply(FootprintPatch {
            title: Some("Hike2".into()),
            location: Some("Ridge".into()),
            description: Some("Long one".into()),
        });

        assert_eq!(footprint.author, before_author);
        assert_eq!(footprint.comments, before_comments);
    }

    #[test]
    fn test_comment_ids_are_unique() {
        let a = Comment::new("u-1", "first");
        let b = Comment::new("u-1", "second");
        assert_ne!(a.id, b.id);
    }
}
