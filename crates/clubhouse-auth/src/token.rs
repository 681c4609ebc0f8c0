//! Token Codec
//!
//! Issues and validates compact signed tokens (JWT, symmetric HMAC). Tokens
//! are stateless: validity is fully determined by the signature and the
//! embedded expiry, never by a server-side lookup. No revocation before
//! expiry - the short default TTL bounds the exposure.
//!
//! Expiry is checked against a caller-supplied `now` so issue and verify use
//! one consistent UTC time source per request.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::TokenConfig;
use crate::error::{AuthError, AuthResult, TokenError};
use crate::types::Claims;

/// Token codec for issuing and validating access tokens
#[derive(Clone)]
pub struct TokenCodec {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from validated configuration
    pub fn new(config: &TokenConfig) -> AuthResult<Self> {
        let algorithm = match config.algorithm.as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(AuthError::Config(format!(
                    "Unsupported signing algorithm: {}",
                    other
                )))
            }
        };

        let ttl = Duration::from_std(config.ttl)
            .map_err(|_| AuthError::Config("Token TTL out of range".to_string()))?;

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl,
        })
    }

    /// Issue a token for a subject, expiring at `now + ttl`
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|_| TokenError::Malformed)
    }

    /// Decode and validate a token, checking expiry against `now`
    ///
    /// Signature verification happens first; expiry is evaluated here rather
    /// than by the JWT library so the time source stays with the caller.
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }

    /// The configured time-to-live
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::TokenConfig;

    pub(crate) fn test_codec() -> TokenCodec {
        TokenCodec::new(&TokenConfig {
            secret: "test-secret-key-for-tokens-min-32-bytes!".to_string(),
            ttl: std::time::Duration::from_secs(30 * 60),
            algorithm: "HS256".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_round_trip() {
        let codec = test_codec();
        let now = Utc::now();

        let token = codec.issue("alice@example.com", now).unwrap();
        let claims = codec.decode(&token, now).unwrap();

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.exp, (now + Duration::minutes(30)).timestamp());
    }

    #[test]
    fn test_expired_at_exact_ttl() {
        let codec = test_codec();
        let issued = Utc::now();
        let token = codec.issue("alice@example.com", issued).unwrap();

        // Validity ends the second the TTL elapses, not one second after
        let at_expiry = issued + Duration::minutes(30);
        assert_eq!(codec.decode(&token, at_expiry), Err(TokenError::Expired));

        let well_past = issued + Duration::hours(2);
        assert_eq!(codec.decode(&token, well_past), Err(TokenError::Expired));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let codec = TokenCodec::new(&TokenConfig {
            secret: "test-secret-key-for-tokens-min-32-bytes!".to_string(),
            ttl: std::time::Duration::from_secs(0),
            algorithm: "HS256".to_string(),
        })
        .unwrap();

        let issued = Utc::now();
        let token = codec.issue("alice@example.com", issued).unwrap();

        let result = codec.decode(&token, issued + Duration::seconds(1));
        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_signature() {
        let codec = test_codec();
        let now = Utc::now();
        let token = codec.issue("alice@example.com", now).unwrap();

        // Flip the last signature character to another base64url character
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(
            codec.decode(&tampered, now),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_payload() {
        let codec = test_codec();
        let now = Utc::now();
        let token = codec.issue("alice@example.com", now).unwrap();

        // Swap in a payload that was never signed
        let parts: Vec<&str> = token.split('.').collect();
        let forged = format!("{}.e30.{}", parts[0], parts[2]);

        assert!(codec.decode(&forged, now).is_err());
    }

    #[test]
    fn test_garbage_is_malformed() {
        let codec = test_codec();
        let now = Utc::now();

        assert_eq!(
            codec.decode("not-a-token", now),
            Err(TokenError::Malformed)
        );
        assert_eq!(codec.decode("", now), Err(TokenError::Malformed));
    }

    #[test]
    fn test_missing_subject_is_malformed() {
        let codec = test_codec();
        let now = Utc::now();

        // Validly signed, but without the subject claim
        let bare = serde_json::json!({ "exp": (now + Duration::minutes(30)).timestamp() });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &bare,
            &EncodingKey::from_secret(b"test-secret-key-for-tokens-min-32-bytes!"),
        )
        .unwrap();

        assert_eq!(codec.decode(&token, now), Err(TokenError::Malformed));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let codec = test_codec();
        let other = TokenCodec::new(&TokenConfig {
            secret: "a-completely-different-32-byte-secret!!!".to_string(),
            ttl: std::time::Duration::from_secs(30 * 60),
            algorithm: "HS256".to_string(),
        })
        .unwrap();

        let now = Utc::now();
        let token = codec.issue("alice@example.com", now).unwrap();

        assert_eq!(
            other.decode(&token, now),
            Err(TokenError::InvalidSignature)
        );
    }
}
