use async_trait::async_trait;
use auth::AuthenticationResult;

use crate::credential::errors::CredentialError;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::RegisterCommand;
use crate::domain::credential::models::Username;

/// Port for the authentication gateway.
#[async_trait]
pub trait AuthGatewayPort: Send + Sync + 'static {
    /// Register a new credential.
    ///
    /// Does not log the new user in.
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Credential, CredentialError>;

    /// Verify a username/password pair and issue an access token.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown user, malformed username, or wrong password
    /// * `Token` - Token generation failed
    /// * `DatabaseError` - Database operation failed
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationResult, CredentialError>;

    /// Resolve a bearer token to the credential it names.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Token invalid, expired, or subject no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, token: &str) -> Result<Credential, CredentialError>;

    /// List every registered credential.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_credentials(&self) -> Result<Vec<Credential>, CredentialError>;
}

/// Persistence operations for credentials.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Retrieve a credential by username.
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_credential(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, CredentialError>;

    /// Persist a new credential.
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Username is already taken (including lost races)
    /// * `DatabaseError` - Database operation failed
    async fn create_credential(
        &self,
        credential: Credential,
    ) -> Result<Credential, CredentialError>;

    /// Retrieve all credentials, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_credentials(&self) -> Result<Vec<Credential>, CredentialError>;
}
