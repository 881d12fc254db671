//! Footprints Authenticator
//!
//! Translates request credentials into resolved principals. The Footprints
//! service consumes this as a capability: every request presents a bearer
//! credential, and the verifier either resolves it to a [`Principal`] or
//! fails before any store access happens.
//!
//! ## Verifiers
//!
//! - **JWT**: Validates HS256-signed tokens against a shared secret and
//!   extracts the principal from the token claims
//! - **Mock**: For testing purposes
//!
//! ## Usage
//!
//! ```ignore
//! use footprints_auth::{JwtVerifier, TokenVerifier};
//!
//! let verifier = JwtVerifier::new("secret");
//! let principal = verifier.verify("eyJ...").await?;
//! println!("Principal: {}", principal.id);
//! ```

pub mod error;
pub mod types;
pub mod verifier;

pub use error::{AuthError, Result};
pub use types::Principal;
pub use verifier::{JwtVerifier, MockVerifier, TokenVerifier};
