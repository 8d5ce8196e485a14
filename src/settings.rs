//! # Settings
//!
//! Layered service settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults (port `8081`, `info` level, text logs)
//! 2. an optional `config` file (`config.toml`, `config.yaml`, ...) in the
//!    working directory
//! 3. `MATCH_TRACKER__*` environment variables, `__` separating sections,
//!    e.g. `MATCH_TRACKER__SERVER__PORT=9000`
//!
//! A `.env` file is loaded into the environment first when present.
//!
//! # Examples
//!
//! ```
//! use match_tracker::settings::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.server.port, 8081);
//! assert_eq!(settings.socket_addr().unwrap().port(), 8081);
//! ```

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8081;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MATCH_TRACKER";

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value had the wrong type.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The `.env` file exists but could not be read or parsed.
    #[error("failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// `server.host` is not an IP address.
    #[error("invalid server host '{0}'")]
    InvalidHost(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind, as an IP literal.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Service settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerSettings,
    /// Logging.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Loads settings from defaults, the optional `config` file, and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a `.env` file or another source cannot be
    /// parsed, or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        env_file_loaded(dotenvy::dotenv())?;

        let builder = Self::defaults()?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
        Self::from_builder(builder)
    }

    /// Returns a builder seeded with the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = LoggingSettings::default();
        Ok(Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.level", defaults.level)?
            .set_default("logging.format", "text")?)
    }

    /// Builds settings from an already assembled builder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the sources cannot be merged or
    /// deserialized, or if the host is not an IP address.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.socket_addr()?;
        Ok(settings)
    }

    /// Returns the address the server should bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] if `server.host` is not an IP
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.server.host.clone()))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

/// Accepts a missing `.env` file; any other failure is an error.
fn env_file_loaded(result: Result<PathBuf, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::EnvFile(err)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::io;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        let builder = Settings::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml));
        Settings::from_builder(builder)
    }

    #[test]
    fn defaults_listen_on_8081() {
        let settings = Settings::from_builder(Settings::defaults().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.socket_addr().unwrap(),
            "0.0.0.0:8081".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn file_overrides_defaults() {
        let settings = from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = from_toml("[server]\nport = \"eighty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn invalid_host_is_rejected() {
        let err = from_toml("[server]\nhost = \"not an ip\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(ref h) if h == "not an ip"));
    }

    #[test]
    fn missing_env_file_is_accepted() {
        assert!(env_file_loaded(Ok(PathBuf::from(".env"))).is_ok());

        let missing = dotenvy::Error::Io(io::Error::new(io::ErrorKind::NotFound, "no .env"));
        assert!(env_file_loaded(Err(missing)).is_ok());
    }

    #[test]
    fn malformed_env_file_is_rejected() {
        let parse = dotenvy::Error::LineParse("PORT 9000".to_string(), 4);
        let err = env_file_loaded(Err(parse)).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile(_)));

        let denied =
            dotenvy::Error::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(env_file_loaded(Err(denied)).is_err());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(from_toml("[logging]\nformat = \"xml\"").is_err());
    }
}
