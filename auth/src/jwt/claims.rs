use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Claims carried by an access token.
///
/// Deliberately minimal: subject, issued-at and expiry only. All fields are
/// optional on the wire so that a token lacking one decodes and is then
/// rejected with a precise reason instead of a generic parse error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Claims {
    /// Subject (username)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Create claims for a subject valid for `ttl` starting at `now`.
    ///
    /// # Returns
    /// Claims with sub, iat, and exp set
    ///
    /// # Errors
    /// * `ExpirationOutOfRange` - `now + ttl` is not a representable instant
    pub fn for_subject(
        subject: impl ToString,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = now
            .checked_add_signed(ttl)
            .ok_or(JwtError::ExpirationOutOfRange)?;

        Ok(Self {
            sub: Some(subject.to_string()),
            iat: Some(now.timestamp()),
            exp: Some(expiration.timestamp()),
        })
    }

    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    #[cfg(test)]
    pub(crate) fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    #[cfg(test)]
    pub(crate) fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// The expiry instant itself is already outside the validity window.
    /// Claims without `exp` are never considered expired here.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| current_timestamp >= exp)
    }
}
