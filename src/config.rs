//! Application configuration: defaults, optional `config/config.*` file, `.env`, then environment.

use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub max_connections: u32,
    /// Server-side `statement_timeout` applied to every pooled connection.
    pub statement_timeout_secs: u64,
    /// Serve from process memory instead of PostgreSQL; `database_url` is then ignored.
    pub in_memory: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    pub allowed_headers: Vec<String>,
    /// Empty mirrors the request origin, since a wildcard cannot be combined with credentials.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    #[serde(default)]
    pub database_url: Option<String>,
    pub environment: String,
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub cors: CorsSettings,
}

impl AppConfig {
    /// Load from defaults, `config/config.{toml,yaml,json}` if present, and the environment
    /// (`PORT`, `DATABASE_URL`, `ENVIRONMENT`, nested keys as `SERVER__REQUEST_TIMEOUT_SECS`).
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(Self::environment())
    }

    fn load_with(env: Environment) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(File::with_name("config/config").required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::default()
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("cors.allowed_headers")
            .with_list_parse_key("cors.allowed_origins")
            .try_parsing(true)
    }

    /// Defaults only; used by `load` and by tests.
    pub fn defaults() -> Result<Self, config::ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("port", 8080)?
            .set_default("environment", "development")?
            .set_default("database.max_connections", 5)?
            .set_default("database.statement_timeout_secs", 5)?
            .set_default("database.in_memory", false)?
            .set_default("server.request_timeout_secs", 5)?
            .set_default("server.body_limit_bytes", 1024 * 1024)?
            .set_default("cors.allowed_headers", vec!["origin", "content-type"])?
            .set_default("cors.allowed_origins", Vec::<String>::new())
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// `DATABASE_URL`, required unless running in memory.
    pub fn require_database_url(&self) -> Result<&str, config::ConfigError> {
        self.database_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| config::ConfigError::NotFound("database_url".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::defaults().unwrap();
        assert_eq!(cfg.port, 8080);
        assert!(cfg.is_development());
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.server.request_timeout_secs, 5);
        assert_eq!(cfg.cors.allowed_headers, vec!["origin", "content-type"]);
        assert!(cfg.cors.allowed_origins.is_empty());
        assert!(!cfg.database.in_memory);
    }

    #[test]
    fn environment_overrides_defaults() {
        let mut vars = config::Map::new();
        vars.insert("PORT".to_string(), "9090".to_string());
        vars.insert("DATABASE_URL".to_string(), "postgres://db/blog".to_string());
        vars.insert("ENVIRONMENT".to_string(), "production".to_string());
        vars.insert("SERVER__REQUEST_TIMEOUT_SECS".to_string(), "30".to_string());
        vars.insert("CORS__ALLOWED_HEADERS".to_string(), "origin,authorization".to_string());

        let cfg = AppConfig::load_with(AppConfig::environment().source(Some(vars))).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://db/blog"));
        assert!(!cfg.is_development());
        assert_eq!(cfg.server.request_timeout_secs, 30);
        assert_eq!(cfg.cors.allowed_headers, vec!["origin", "authorization"]);
        assert_eq!(cfg.server.body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn database_url_is_required() {
        let mut cfg = AppConfig::defaults().unwrap();
        assert!(cfg.require_database_url().is_err());
        cfg.database_url = Some("postgres://localhost/blog".into());
        assert_eq!(cfg.require_database_url().unwrap(), "postgres://localhost/blog");
    }
}
