//! Core types for the Authenticator

use serde::{Deserialize, Serialize};

/// An authenticated identity
///
/// This is the output of credential verification. The Footprints service
/// holds a read-only reference to it for the duration of one request and
/// uses `id` for every ownership decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier of the principal
    pub id: String,

    /// Login name
    pub username: String,

    /// Optional display name for profile rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Principal {
    /// Create a new principal
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            display_name: None,
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}
