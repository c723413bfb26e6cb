use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options of the places service.
///
/// Loaded once at start and passed to the components that need it.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// SQLite database path or URL.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
}

impl ServerConfig {
    /// Reads `config/default.yaml` (if present) and `APP__*` environment
    /// variables, the latter taking precedence.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("database_url", "app.db")?
            .set_default("pool_size", 8)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::from_config(config)
    }

    /// Deserializes and checks an assembled configuration.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let server_config: Self = config.try_deserialize()?;
        if server_config.pool_size == 0 {
            return Err(ConfigError::Message(
                "pool_size must be greater than zero".to_string(),
            ));
        }
        Ok(server_config)
    }
}
