//! Password Service
//!
//! Password hashing using Argon2id with per-hash random salts. The salt and
//! parameters are embedded in the PHC output string, so verification needs no
//! side storage, and comparison is constant-time.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};

use crate::config::PasswordConfig;
use crate::error::{AuthError, AuthResult};

/// Password service for hashing and verification
#[derive(Clone)]
pub struct PasswordService {
    config: PasswordConfig,
}

impl PasswordService {
    /// Create a new password service
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    /// Hash a password using Argon2id
    ///
    /// A fresh random salt means the same plaintext never produces the same
    /// output twice.
    pub fn hash(&self, plaintext: &str) -> AuthResult<String> {
        self.check_length(plaintext)?;

        let salt = SaltString::generate(&mut OsRng);

        let params = Params::new(
            self.config.memory_cost,
            self.config.time_cost,
            self.config.parallelism,
            Some(self.config.hash_length as usize),
        )
        .map_err(|e| AuthError::Config(format!("Invalid Argon2 params: {}", e)))?;

        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

        let hash = argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|_| AuthError::PasswordHashingFailed)?;

        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash
    ///
    /// Returns `Ok(false)` on a mismatch. A malformed stored hash is a
    /// distinct error, not a mismatch; callers on the login path must treat
    /// both as a failed authentication.
    pub fn verify(&self, plaintext: &str, hash: &str) -> AuthResult<bool> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidPasswordHash)?;

        match Argon2::default().verify_password(plaintext.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(_) => Err(AuthError::InvalidPasswordHash),
        }
    }

    fn check_length(&self, plaintext: &str) -> AuthResult<()> {
        if plaintext.len() < self.config.min_password_length {
            return Err(AuthError::WeakPassword(format!(
                "Password must be at least {} characters",
                self.config.min_password_length
            )));
        }
        if plaintext.len() > self.config.max_password_length {
            return Err(AuthError::WeakPassword(format!(
                "Password must be at most {} characters",
                self.config.max_password_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_config() -> PasswordConfig {
        PasswordConfig {
            // Lower costs so tests stay fast
            memory_cost: 4096,
            time_cost: 1,
            parallelism: 1,
            hash_length: 32,
            min_password_length: 8,
            max_password_length: 128,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let service = PasswordService::new(test_config());
        let password = "correct horse battery";

        let hash = service.hash(password).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, password);

        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_hashes() {
        let service = PasswordService::new(test_config());
        let password = "correct horse battery";

        let hash1 = service.hash(password).unwrap();
        let hash2 = service.hash(password).unwrap();

        // Random salts: same input, different outputs
        assert_ne!(hash1, hash2);

        // Both still verify
        assert!(service.verify(password, &hash1).unwrap());
        assert!(service.verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_not_a_mismatch() {
        let service = PasswordService::new(test_config());

        let result = service.verify("anything", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::InvalidPasswordHash)));
    }

    #[test]
    fn test_length_limits() {
        let service = PasswordService::new(test_config());

        assert!(matches!(
            service.hash("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(matches!(
            service.hash(&"x".repeat(200)),
            Err(AuthError::WeakPassword(_))
        ));
    }
}
