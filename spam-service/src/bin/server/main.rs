use std::sync::Arc;

use auth::Authenticator;
use auth::SigningSecret;
use spam_service::config::Config;
use spam_service::domain::credential::service::AuthGateway;
use spam_service::inbound::http::router::create_router;
use spam_service::outbound::repositories::PostgresCredentialRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MAX_DB_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spam_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "spam-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    let config = Config::load()?;

    let secret = SigningSecret::new(config.jwt.secret.as_bytes()).map_err(|e| {
        tracing::error!(error = %e, "Refusing to start without a signing secret");
        e
    })?;

    let token_ttl = config.jwt.token_ttl().map_err(|e| {
        tracing::error!(error = %e, "Refusing to start with an invalid token lifetime");
        e
    })?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = MAX_DB_CONNECTIONS,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(&secret));
    let repository = Arc::new(PostgresCredentialRepository::new(pg_pool));
    let gateway = Arc::new(AuthGateway::new(
        repository,
        authenticator,
        token_ttl,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(gateway)).await?;

    tracing::info!("Server exited successfully");
    Ok(())
}
