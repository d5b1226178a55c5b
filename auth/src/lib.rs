//! Authentication utilities library
//!
//! Credential primitives shared by the HTTP service:
//! - Password hashing (Argon2id)
//! - Access token issuance and verification (HS256 JWT)
//! - Authentication coordination
//!
//! Nothing in here touches storage; resolving a token subject to a stored
//! identity is the service's job.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{SigningSecret, TokenIssuer, TokenVerifier};
//! use chrono::{Duration, Utc};
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let issuer = TokenIssuer::new(&secret);
//! let verifier = TokenVerifier::new(&secret);
//!
//! let now = Utc::now();
//! let token = issuer.issue("alice", now, Duration::minutes(30)).unwrap();
//! assert_eq!(verifier.verify(&token, now).unwrap(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SigningSecret};
//! use chrono::{Duration, Utc};
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&secret);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let now = Utc::now();
//! let result = auth
//!     .authenticate("password123", &hash, "alice", now, Duration::minutes(30))
//!     .unwrap();
//!
//! // Validate token
//! let subject = auth.validate_token(&result.access_token, now).unwrap();
//! assert_eq!(subject, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::ConfigurationError;
pub use jwt::InvalidToken;
pub use jwt::JwtError;
pub use jwt::SigningSecret;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
