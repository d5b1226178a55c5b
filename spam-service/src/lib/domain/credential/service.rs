use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::AuthenticationResult;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::credential::errors::CredentialError;
use crate::credential::ports::AuthGatewayPort;
use crate::credential::ports::CredentialRepository;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::CredentialId;
use crate::domain::credential::models::RegisterCommand;
use crate::domain::credential::models::Username;

/// Authentication gateway.
///
/// Orchestrates registration, login and bearer-token authentication on top of
/// the auth library and an injected credential repository. Every rejection a
/// caller can observe is the same `AuthenticationFailed`; the actual cause is
/// only logged.
pub struct AuthGateway<R>
where
    R: CredentialRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
}

impl<R> AuthGateway<R>
where
    R: CredentialRepository,
{
    /// Create a new gateway with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential persistence implementation
    /// * `authenticator` - Hashing and token primitives
    /// * `token_ttl` - Lifetime of issued access tokens
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>, token_ttl: Duration) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl,
        }
    }

    /// Login evaluated at an explicit instant.
    pub async fn login_at(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, CredentialError> {
        let Ok(username) = Username::new(username.to_string()) else {
            tracing::warn!("Login rejected: malformed username");
            return Err(CredentialError::AuthenticationFailed);
        };

        let Some(credential) = self.repository.find_credential(&username).await? else {
            self.authenticator.reject_unknown(password);
            tracing::warn!(username = %username, "Login rejected: unknown username");
            return Err(CredentialError::AuthenticationFailed);
        };

        let result = self
            .authenticator
            .authenticate(
                password,
                &credential.password_hash,
                credential.username.as_str(),
                now,
                self.token_ttl,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(username = %username, "Login rejected: wrong password");
                    CredentialError::AuthenticationFailed
                }
                AuthenticationError::JwtError(err) => CredentialError::Token(err),
            })?;

        tracing::info!(username = %username, "Access token issued");
        Ok(result)
    }

    /// Authentication evaluated at an explicit instant.
    pub async fn authenticate_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Credential, CredentialError> {
        let subject = self
            .authenticator
            .validate_token(token, now)
            .map_err(|e| {
                tracing::warn!(reason = %e, "Token rejected");
                CredentialError::AuthenticationFailed
            })?;

        let username = Username::new(subject).map_err(|e| {
            tracing::warn!(reason = %e, "Token rejected: subject is not a valid username");
            CredentialError::AuthenticationFailed
        })?;

        self.repository
            .find_credential(&username)
            .await?
            .ok_or_else(|| {
                tracing::warn!(username = %username, "Token rejected: subject no longer exists");
                CredentialError::AuthenticationFailed
            })
    }
}

#[async_trait]
impl<R> AuthGatewayPort for AuthGateway<R>
where
    R: CredentialRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Credential, CredentialError> {
        // Only a fast path; the unique constraint behind create_credential decides races.
        if self
            .repository
            .find_credential(&command.username)
            .await?
            .is_some()
        {
            return Err(CredentialError::DuplicateIdentity(
                command.username.to_string(),
            ));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let credential = Credential {
            id: CredentialId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create_credential(credential).await?;
        tracing::info!(username = %created.username, "Credential registered");

        Ok(created)
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationResult, CredentialError> {
        self.login_at(username, password, Utc::now()).await
    }

    async fn authenticate(&self, token: &str) -> Result<Credential, CredentialError> {
        self.authenticate_at(token, Utc::now()).await
    }

    async fn list_credentials(&self) -> Result<Vec<Credential>, CredentialError> {
        self.repository.list_credentials().await
    }
}
