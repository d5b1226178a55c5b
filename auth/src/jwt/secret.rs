use std::fmt;

use super::errors::ConfigurationError;

/// Process-wide HMAC signing secret.
///
/// Built once at startup from deployment configuration and handed by
/// reference to the token issuer and verifier. Never printed.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Build the secret from raw configuration input.
    ///
    /// # Errors
    /// * `MissingSecret` - The value is empty or only whitespace
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, ConfigurationError> {
        let secret = secret.into();
        if secret.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(ConfigurationError::MissingSecret);
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret([hidden])")
    }
}
