use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenHandler;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the process-wide signing key and token lifetime so callers only
/// deal in passwords, hashes, and user identifiers.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_handler: TokenHandler,
    token_lifetime: Duration,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_lifetime` - How long issued tokens stay valid
    pub fn new(jwt_secret: &[u8], token_lifetime: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_handler: TokenHandler::new(jwt_secret),
            token_lifetime,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash and issue a token on success.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(user_id)?)
    }

    /// Issue a signed token carrying the user identifier.
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn issue_token(&self, user_id: impl ToString) -> Result<String, TokenError> {
        let claims = Claims::for_user(user_id, self.token_lifetime);
        self.token_handler.encode(&claims)
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Token is missing required claims, expired, or invalid
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(
            b"test_secret_key_at_least_32_bytes!",
            Duration::days(7),
        );

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let token = authenticator
            .authenticate(password, &hash, "user123")
            .expect("Authentication failed");
        assert!(!token.is_empty());

        let claims = authenticator
            .validate_token(&token)
            .expect("Token validation failed");
        assert_eq!(claims.sub, "user123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(
            b"test_secret_key_at_least_32_bytes!",
            Duration::days(7),
        );

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issued_token_expiration() {
        let authenticator = Authenticator::new(
            b"test_secret_key_at_least_32_bytes!",
            Duration::days(7),
        );

        let token = authenticator
            .issue_token("user123")
            .expect("Failed to issue token");
        let claims = authenticator
            .validate_token(&token)
            .expect("Token validation failed");

        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(
            b"test_secret_key_at_least_32_bytes!",
            Duration::days(7),
        );

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
