//! Credential verifiers

pub mod jwt;
pub mod mock;

pub use jwt::JwtVerifier;
pub use mock::MockVerifier;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Principal;

/// Trait for credential verifiers
///
/// A verifier resolves a raw credential string to a principal or fails.
/// The Footprints service holds one verifier behind `Arc<dyn TokenVerifier>`
/// and routes every request credential through it before any other work.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a credential and resolve the principal
    ///
    /// # Arguments
    /// * `credential` - The raw credential string
    ///
    /// # Returns
    /// * `Ok(Principal)` - The resolved identity
    /// * `Err(AuthError)` - If verification fails
    async fn verify(&self, credential: &str) -> Result<Principal>;

    /// Get a description of this verifier (for logging)
    fn description(&self) -> &str {
        "token verifier"
    }
}
