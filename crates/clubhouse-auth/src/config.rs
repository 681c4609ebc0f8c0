//! Authentication configuration
//!
//! Centralized configuration for the auth components with secure defaults.
//! The signing secret always comes from the environment or a config file;
//! there is no baked-in value.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token codec configuration
    #[serde(default)]
    pub token: TokenConfig,
    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

/// Access token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Secret key for signing tokens (at least 256 bits)
    pub secret: String,
    /// Access token time-to-live
    #[serde(with = "humantime_serde")]
    pub ttl: Duration,
    /// Signing algorithm (HS256, HS384, HS512)
    pub algorithm: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // Must be set in production
            ttl: Duration::from_secs(30 * 60),
            algorithm: "HS256".to_string(),
        }
    }
}

/// Password hashing configuration (Argon2id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Memory cost in KiB (OWASP recommends 19456 KiB minimum)
    pub memory_cost: u32,
    /// Time cost (iterations)
    pub time_cost: u32,
    /// Parallelism factor
    pub parallelism: u32,
    /// Output hash length in bytes
    pub hash_length: u32,
    /// Minimum plaintext length
    pub min_password_length: usize,
    /// Maximum plaintext length (to prevent DoS)
    pub max_password_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_cost: 19456, // 19 MiB
            time_cost: 2,
            parallelism: 1,
            hash_length: 32,
            min_password_length: 8,
            max_password_length: 128,
        }
    }
}

impl AuthConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.token.secret = secret;
        }
        if let Ok(algorithm) = std::env::var("JWT_ALGORITHM") {
            config.token.algorithm = algorithm;
        }
        if let Ok(ttl) = std::env::var("ACCESS_TOKEN_TTL_SECS") {
            if let Ok(secs) = ttl.parse() {
                config.token.ttl = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.token.secret.is_empty() {
            errors.push("JWT secret must be set".to_string());
        } else if self.token.secret.len() < 32 {
            errors.push("JWT secret should be at least 256 bits (32 bytes)".to_string());
        }

        if !matches!(self.token.algorithm.as_str(), "HS256" | "HS384" | "HS512") {
            errors.push(format!(
                "Unsupported signing algorithm: {}",
                self.token.algorithm
            ));
        }

        if self.token.ttl.as_secs() == 0 {
            errors.push("Token TTL must be non-zero".to_string());
        }

        if self.password.min_password_length > self.password.max_password_length {
            errors.push("Minimum password length exceeds maximum".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.token.ttl, Duration::from_secs(30 * 60));
        assert_eq!(config.token.algorithm, "HS256");
        assert_eq!(config.password.memory_cost, 19456);
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_asymmetric_algorithm() {
        let mut config = AuthConfig::default();
        config.token.secret = "a".repeat(32);
        config.token.algorithm = "RS256".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid() {
        let mut config = AuthConfig::default();
        config.token.secret = "a".repeat(32);
        assert!(config.validate().is_ok());
    }
}
