use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::InvalidToken;
use super::secret::SigningSecret;

/// Validates access tokens and extracts their subject.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier accepting tokens signed with `secret`.
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller-supplied instant in `verify`.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify `token` at instant `now` and return its subject.
    ///
    /// # Errors
    /// * `BadSignature` - Signed with another key or tampered with
    /// * `Malformed` - Not a decodable HS256 token
    /// * `MissingClaim` - `sub` or `exp` absent (or `sub` empty)
    /// * `Expired` - `now` is at or past `exp`
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<String, InvalidToken> {
        let claims = self.decode(token)?;

        if claims.exp.is_none() {
            return Err(InvalidToken::MissingClaim("exp"));
        }
        if claims.is_expired(now.timestamp()) {
            return Err(InvalidToken::Expired);
        }

        claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or(InvalidToken::MissingClaim("sub"))
    }

    /// Check the signature and decode claims without looking at expiry.
    fn decode(&self, token: &str) -> Result<Claims, InvalidToken> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => InvalidToken::BadSignature,
                _ => InvalidToken::Malformed(e.to_string()),
            })
    }
}
