use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub admin_jwt_secret: String,
    pub admin_jwt_expiration_hours: i64,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Talent catalogue cache
    pub catalogue_cache_enabled: bool,
    pub catalogue_cache_ttl_secs: u64,
    /// Empty means any origin
    pub cors_allowed_origins: Vec<String>,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|s| matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(default)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            admin_jwt_secret: env::var("ADMIN_JWT_SECRET")?,
            admin_jwt_expiration_hours: env::var("ADMIN_JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            catalogue_cache_enabled: env_flag("CATALOGUE_CACHE_ENABLED", false),
            catalogue_cache_ttl_secs: env::var("CATALOGUE_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
            run_migrations: env_flag("RUN_MIGRATIONS", true),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn catalogue_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.catalogue_cache_ttl_secs)
    }
}
