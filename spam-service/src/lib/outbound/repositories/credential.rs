use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::credential::errors::CredentialError;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::CredentialId;
use crate::domain::credential::models::EmailAddress;
use crate::domain::credential::models::Username;
use crate::domain::credential::ports::CredentialRepository;

const USERNAME_CONSTRAINT: &str = "users_username_key";

pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CredentialRow> for Credential {
    type Error = CredentialError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        Ok(Credential {
            id: CredentialId(row.id),
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn find_credential(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, CredentialError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        row.map(Credential::try_from).transpose()
    }

    async fn create_credential(
        &self,
        credential: Credential,
    ) -> Result<Credential, CredentialError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(credential.id.0)
        .bind(credential.username.as_str())
        .bind(credential.email.as_str())
        .bind(&credential.password_hash)
        .bind(credential.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(USERNAME_CONSTRAINT)
                {
                    return CredentialError::DuplicateIdentity(
                        credential.username.as_str().to_string(),
                    );
                }
            }
            CredentialError::DatabaseError(e.to_string())
        })?;

        Ok(credential)
    }

    async fn list_credentials(&self) -> Result<Vec<Credential>, CredentialError> {
        let rows = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Credential::try_from).collect()
    }
}
