//! Mock Credential Verifier
//!
//! For testing purposes - resolves mock credentials without cryptography.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{AuthError, Result};
use crate::types::Principal;
use crate::verifier::TokenVerifier;

/// Mock verifier for testing
///
/// Accepts credentials in the format:
/// - a token registered via [`with_principal`](Self::with_principal) resolves
///   to that principal
/// - any other non-empty token resolves to a principal whose id and username
///   are the token itself
/// - `"FAIL:message"` returns an error with the given message
#[derive(Debug, Default)]
pub struct MockVerifier {
    principals: HashMap<String, Principal>,
}

impl MockVerifier {
    /// Create a new mock verifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token that resolves to a specific principal
    pub fn with_principal(mut self, token: impl Into<String>, principal: Principal) -> Self {
        self.principals.insert(token.into(), principal);
        self
    }
}

#[async_trait]
impl TokenVerifier for MockVerifier {
    async fn verify(&self, credential: &str) -> Result<Principal> {
        if let Some(message) = credential.strip_prefix("FAIL:") {
            return Err(AuthError::ValidationFailed(message.to_string()));
        }

        if let Some(principal) = self.principals.get(credential) {
            return Ok(principal.clone());
        }

        if credential.is_empty() {
            return Err(AuthError::InvalidFormat(
                "Mock credential cannot be empty".into(),
            ));
        }

        // A bare token doubles as the principal id
        Ok(Principal::new(credential, credential))
    }

    fn description(&self) -> &str {
        "mock verifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registered_token() {
        let verifier = MockVerifier::new()
            .with_principal("token-1", Principal::new("u-1", "alice"));

        let principal = verifier.verify("token-1").await.unwrap();
        assert_eq!(principal.id, "u-1");
        assert_eq!(principal.username, "alice");
    }

    #[tokio::test]
    async fn test_bare_token_becomes_principal() {
        let principal = MockVerifier::new().verify("bob").await.unwrap();
        assert_eq!(principal.id, "bob");
    }

    #[tokio::test]
    async fn test_explicit_failure() {
        let result = MockVerifier::new().verify("FAIL:boom").await;
        assert!(matches!(result, Err(AuthError::ValidationFailed(msg)) if msg == "boom"));
    }

    #[tokio::test]
    async fn test_empty_token_rejected() {
        assert!(MockVerifier::new().verify("").await.is_err());
    }

    #[test]
    fn test_description() {
        assert_eq!(MockVerifier::new().description(), "mock verifier");
    }
}
