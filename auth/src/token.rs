use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Bearer token claims.
///
/// The subject carries the authenticated user identifier; expiration is
/// always set so a token cannot outlive its configured lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the authenticated user identifier
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a user with an expiration relative to now.
    pub fn for_user(user_id: impl ToString, lifetime: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}

/// Signed bearer token handler.
///
/// Encodes and decodes HS256 JWTs with a process-wide secret. The secret
/// should be at least 256 bits and come from configuration, never from code.
pub struct TokenHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenHandler {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token, including signature and expiration.
    ///
    /// # Errors
    /// * `Expired` - Token expiration time has passed
    /// * `Invalid` - Token is malformed or its signature does not verify
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode() {
        let handler = TokenHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = Claims::for_user("user123", Duration::days(7));
        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = TokenHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.decode("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = TokenHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = TokenHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = Claims::for_user("user123", Duration::days(7));
        let token = handler1.encode(&claims).expect("Failed to encode token");

        let result = handler2.decode(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = TokenHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        // Issued in the past, well beyond the default validation leeway
        let claims = Claims::for_user("user123", Duration::hours(-2));
        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }
}
