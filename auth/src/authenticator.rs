use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::InvalidToken;
use crate::jwt::JwtError;
use crate::jwt::SigningSecret;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token handling.
///
/// Holds no mutable state; share it behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Validated signing secret
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(secret),
            token_verifier: TokenVerifier::new(secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Spend the cost of a password check for a subject with no stored hash.
    ///
    /// Always fails with `InvalidCredentials`.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        self.password_hasher.verify_unknown(password);
        AuthenticationError::InvalidCredentials
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to put in the token
    /// * `now` - Issue instant
    /// * `ttl` - Token validity period
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.issue(subject, now, ttl)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate a token at `now` and return its subject.
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<String, InvalidToken> {
        self.token_verifier.verify(token, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        let secret = SigningSecret::new("test_secret_key_at_least_32_bytes!").unwrap();
        Authenticator::new(&secret)
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();
        let now = Utc::now();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "alice", now, Duration::minutes(30))
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let subject = authenticator
            .validate_token(&result.access_token, now)
            .expect("Token validation failed");
        assert_eq!(subject, "alice");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate(
            "wrong_password",
            &hash,
            "alice",
            Utc::now(),
            Duration::minutes(30),
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_stored_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate(
            "my_password",
            "not-a-phc-string",
            "alice",
            Utc::now(),
            Duration::minutes(30),
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_oversized_ttl() {
        let authenticator = authenticator();
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate(
            "my_password",
            &hash,
            "alice",
            Utc::now(),
            Duration::minutes(200_000_000_000),
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::JwtError(JwtError::ExpirationOutOfRange))
        ));
    }

    #[test]
    fn test_reject_unknown() {
        let authenticator = authenticator();

        assert!(matches!(
            authenticator.reject_unknown("my_password"),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = authenticator();
        let now = Utc::now();

        let token = authenticator
            .token_issuer
            .issue("alice", now, Duration::minutes(5))
            .expect("Failed to generate token");

        assert_eq!(authenticator.validate_token(&token, now).unwrap(), "alice");
        assert_eq!(
            authenticator.validate_token(&token, now + Duration::minutes(6)),
            Err(InvalidToken::Expired)
        );
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        let result = authenticator.validate_token("invalid.token.here", Utc::now());
        assert!(result.is_err());
    }
}
