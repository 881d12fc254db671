//! JWT Credential Verifier
//!
//! Validates HS256-signed tokens against a shared secret. The principal id
//! comes from the `sub` claim; `username` and `name` fill the profile fields
//! when present.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::error::Result;
use crate::types::Principal;
use crate::verifier::TokenVerifier;

/// JWT claims we care about
#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Standard JWT claims, not all used directly
struct Claims {
    /// Subject - becomes the principal id
    sub: String,
    /// Login name
    username: Option<String>,
    /// Display name
    name: Option<String>,
    /// Expiration
    exp: i64,
    /// Issued at
    iat: Option<i64>,
    /// All other claims
    #[serde(flatten)]
    extra: HashMap<String, serde_json::Value>,
}

/// HS256 shared-secret JWT verifier
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Create a verifier for the given shared secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, credential: &str) -> Result<Principal> {
        let data = decode::<Claims>(credential, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        let username = claims.username.unwrap_or_else(|| claims.sub.clone());
        let mut principal = Principal::new(claims.sub, username);
        if let Some(name) = claims.name {
            principal = principal.with_display_name(name);
        }

        debug!(principal = %principal.id, "Verified JWT credential");
        Ok(principal)
    }

    fn description(&self) -> &str {
        "HS256 JWT verifier"
    }
}
