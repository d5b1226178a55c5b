use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;
use super::secret::SigningSecret;

/// Issues signed, time-limited access tokens.
///
/// Tokens are HS256 JWTs carrying [`Claims`]. The issuer never stores what it
/// hands out.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create an issuer signing with `secret`.
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `subject`, valid from `now` for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Identity asserted by the token
    /// * `now` - Issue instant
    /// * `ttl` - Validity period
    ///
    /// # Returns
    /// Compact JWT string (`header.claims.signature`)
    ///
    /// # Errors
    /// * `ExpirationOutOfRange` - `ttl` pushes the expiry past the representable range
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, now, ttl)?)
    }

    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_compact_token() {
        let secret = SigningSecret::new("my_secret_key_at_least_32_bytes_long!").unwrap();
        let issuer = TokenIssuer::new(&secret);
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        let token = issuer
            .issue("alice", now, Duration::minutes(30))
            .expect("Failed to issue token");

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_issue_with_oversized_ttl() {
        let secret = SigningSecret::new("my_secret_key_at_least_32_bytes_long!").unwrap();
        let issuer = TokenIssuer::new(&secret);

        let result = issuer.issue("alice", Utc::now(), Duration::minutes(200_000_000_000));
        assert!(matches!(result, Err(JwtError::ExpirationOutOfRange)));
    }

    #[test]
    fn test_issue_is_deterministic_for_same_instant() {
        let secret = SigningSecret::new("my_secret_key_at_least_32_bytes_long!").unwrap();
        let issuer = TokenIssuer::new(&secret);
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        let first = issuer.issue("alice", now, Duration::minutes(30)).unwrap();
        let second = issuer.issue("alice", now, Duration::minutes(30)).unwrap();
        let other = issuer.issue("bob", now, Duration::minutes(30)).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }
}
