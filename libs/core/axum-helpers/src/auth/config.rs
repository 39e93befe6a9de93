//! Configuration for bearer-token authentication.
//!
//! Follows the same `FromEnv` pattern as `PostgresConfig` and `ServerConfig`.

use core_config::{ConfigError, FromEnv, env_required};

/// Token signing configuration.
///
/// Loaded from environment variables:
/// - `TOKEN_SECRET` (required) - Must be at least 32 characters
///
/// A missing or too-short secret is a startup-fatal condition; requests are
/// never served without a usable signing key.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::TokenConfig;
/// use core_config::FromEnv;
///
/// // From environment variables
/// let config = TokenConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = TokenConfig::new("my-super-secret-key-that-is-at-least-32-chars");
/// ```
#[derive(Clone, Debug)]
pub struct TokenConfig {
    /// Shared signing secret (minimum 32 characters)
    pub secret: String,
}

impl TokenConfig {
    /// Create a new TokenConfig with the given secret.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "token secret must be at least 32 characters"
        );
        Self { secret }
    }
}

impl FromEnv for TokenConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("TOKEN_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "TOKEN_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        Ok(Self { secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_new_valid() {
        let secret = "this-is-a-valid-secret-with-32-chars!";
        let config = TokenConfig::new(secret);
        assert_eq!(config.secret, secret);
    }

    #[test]
    #[should_panic(expected = "token secret must be at least 32 characters")]
    fn test_token_config_new_too_short() {
        TokenConfig::new("short");
    }

    #[test]
    fn test_token_config_from_env_valid() {
        temp_env::with_var(
            "TOKEN_SECRET",
            Some("this-is-a-valid-secret-with-32-chars!"),
            || {
                let config = TokenConfig::from_env();
                assert!(config.is_ok());
                assert_eq!(
                    config.unwrap().secret,
                    "this-is-a-valid-secret-with-32-chars!"
                );
            },
        );
    }

    #[test]
    fn test_token_config_from_env_missing() {
        temp_env::with_var_unset("TOKEN_SECRET", || {
            let config = TokenConfig::from_env();
            assert!(config.is_err());
            let err = config.unwrap_err();
            assert!(err.to_string().contains("TOKEN_SECRET"));
        });
    }

    #[test]
    fn test_token_config_from_env_too_short() {
        temp_env::with_var("TOKEN_SECRET", Some("short"), || {
            let config = TokenConfig::from_env();
            assert!(config.is_err());
            let err = config.unwrap_err();
            assert!(err.to_string().contains("32 characters"));
        });
    }
}
