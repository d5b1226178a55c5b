use std::env;
use std::fmt;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Token settings.
///
/// `secret` deliberately has no fallback: an empty value is rejected when the
/// signing secret is built at startup.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
}

/// One year.
const MAX_EXPIRATION_MINUTES: i64 = 365 * 24 * 60;

fn default_expiration_minutes() -> i64 {
    30
}

impl JwtConfig {
    /// Lifetime of issued access tokens.
    ///
    /// # Errors
    /// * `ConfigError::Message` - `expiration_minutes` is not in `1..=525600`
    pub fn token_ttl(&self) -> Result<Duration, ConfigError> {
        if !(1..=MAX_EXPIRATION_MINUTES).contains(&self.expiration_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be between 1 and {}, got {}",
                MAX_EXPIRATION_MINUTES, self.expiration_minutes
            )));
        }

        Duration::try_minutes(self.expiration_minutes).ok_or_else(|| {
            ConfigError::Message(format!(
                "jwt.expiration_minutes is out of range: {}",
                self.expiration_minutes
            ))
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_debug_hides_secret() {
        let config = JwtConfig {
            secret: "do-not-print-me".to_string(),
            expiration_minutes: 30,
        };

        let printed = format!("{:?}", config);
        assert!(!printed.contains("do-not-print-me"));
        assert!(printed.contains("expiration_minutes: 30"));
    }

    fn jwt_config(expiration_minutes: i64) -> JwtConfig {
        JwtConfig {
            secret: String::new(),
            expiration_minutes,
        }
    }

    #[test]
    fn test_token_ttl_within_bounds() {
        assert_eq!(jwt_config(30).token_ttl().unwrap(), Duration::minutes(30));
        assert_eq!(
            jwt_config(MAX_EXPIRATION_MINUTES).token_ttl().unwrap(),
            Duration::days(365)
        );
    }

    #[test]
    fn test_token_ttl_rejects_out_of_range() {
        for minutes in [0, -5, MAX_EXPIRATION_MINUTES + 1, 200_000_000_000, i64::MAX] {
            assert!(
                matches!(jwt_config(minutes).token_ttl(), Err(ConfigError::Message(_))),
                "accepted {} minutes",
                minutes
            );
        }
    }

    #[test]
    fn test_jwt_config_defaults() {
        let config: JwtConfig = serde_json::from_str("{}").unwrap();
        assert!(config.secret.is_empty());
        assert_eq!(config.expiration_minutes, 30);
    }
}
