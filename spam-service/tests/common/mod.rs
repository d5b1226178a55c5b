use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::SigningSecret;
use auth::TokenIssuer;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::json;
use serde_json::Value;
use spam_service::credential::errors::CredentialError;
use spam_service::credential::models::Credential;
use spam_service::credential::models::Username;
use spam_service::credential::ports::CredentialRepository;
use spam_service::domain::credential::service::AuthGateway;
use spam_service::inbound::http::router::create_router;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Credential store kept in memory, enforcing username uniqueness like the
/// database constraint does.
#[derive(Default)]
pub struct InMemoryCredentialRepository {
    credentials: Mutex<Vec<Credential>>,
}

impl InMemoryCredentialRepository {
    pub fn snapshot(&self) -> Vec<Credential> {
        self.credentials.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_credential(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, CredentialError> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.username == username)
            .cloned())
    }

    async fn create_credential(
        &self,
        credential: Credential,
    ) -> Result<Credential, CredentialError> {
        let mut credentials = self.credentials.lock().unwrap();
        if credentials.iter().any(|c| c.username == credential.username) {
            return Err(CredentialError::DuplicateIdentity(
                credential.username.to_string(),
            ));
        }
        credentials.push(credential.clone());
        Ok(credential)
    }

    async fn list_credentials(&self) -> Result<Vec<Credential>, CredentialError> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .rev()
            .cloned()
            .collect())
    }
}

/// Test application driving the router in-process
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryCredentialRepository>,
    pub gateway: Arc<AuthGateway<InMemoryCredentialRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub issuer: TokenIssuer,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub fn spawn() -> Self {
        let secret = SigningSecret::new(TEST_SECRET).expect("Invalid test secret");
        let authenticator = Arc::new(Authenticator::new(&secret));
        let repository = Arc::new(InMemoryCredentialRepository::default());
        let gateway = Arc::new(AuthGateway::new(
            Arc::clone(&repository),
            Arc::clone(&authenticator),
            Duration::minutes(30),
        ));

        let router = create_router(gateway.clone());

        Self {
            router,
            repository,
            gateway,
            authenticator,
            issuer: TokenIssuer::new(&secret),
        }
    }

    /// Send a request through the router
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, None, Some(body)).await
    }

    pub async fn get_authenticated(&self, path: &str, token: &str) -> TestResponse {
        self.request(Method::GET, path, Some(token), None).await
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> TestResponse {
        self.post(
            "/api/users",
            json!({
                "username": username,
                "email": email,
                "password": password
            }),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.post(
            "/api/auth/login",
            json!({
                "username": username,
                "password": password
            }),
        )
        .await
    }

    /// Register and log in, returning the access token
    pub async fn token_for(&self, username: &str, password: &str) -> String {
        self.register(username, &format!("{}@example.com", username), password)
            .await;
        let response = self.login(username, password).await;
        response.body["access_token"]
            .as_str()
            .expect("Login did not return a token")
            .to_string()
    }
}
