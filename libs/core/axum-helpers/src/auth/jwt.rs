use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::config::TokenConfig;

/// Token time-to-live: one hour from issuance
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Claims carried by an issued token.
///
/// Deliberately minimal: no issuer, audience, or subject. The token proves
/// possession of the shared secret, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub exp: i64, // Expiration time
    pub iat: i64, // Issued at
}

/// Stateless bearer-token authentication over a shared HS256 secret.
///
/// The issuer and the verifier hold the same secret, so both sides always
/// agree on key and algorithm. No per-request state is kept; every request is
/// verified independently.
#[derive(Clone)]
pub struct BearerAuth {
    secret: String,
}

impl BearerAuth {
    /// Create a new auth instance from the token configuration.
    ///
    /// # Example
    /// ```ignore
    /// use axum_helpers::{BearerAuth, TokenConfig};
    /// use core_config::FromEnv;
    ///
    /// let config = TokenConfig::from_env()?;
    /// let auth = BearerAuth::new(&config);
    /// ```
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Create a signed token expiring [`TOKEN_TTL_SECS`] from now
    pub fn create_token(&self) -> eyre::Result<String> {
        self.create_token_with_ttl(TOKEN_TTL_SECS)
    }

    fn create_token_with_ttl(&self, ttl_seconds: i64) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify signature and expiry, returning the decoded claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
