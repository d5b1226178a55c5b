use thiserror::Error;

/// Error raised while building signing configuration.
///
/// Only ever produced at startup; a process that cannot build its
/// [`SigningSecret`](super::SigningSecret) must not serve requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("JWT signing secret is not set")]
    MissingSecret,
}

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token expiration is outside the representable time range")]
    ExpirationOutOfRange,
}

/// Reasons a presented token is rejected.
///
/// Callers outside the auth boundary must collapse every variant into the
/// same response; the variants exist for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidToken {
    #[error("Token signature does not verify")]
    BadSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Missing required claim: {0}")]
    MissingClaim(&'static str),

    #[error("Token is expired")]
    Expired,
}
