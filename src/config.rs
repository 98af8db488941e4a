//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP paths, cache headers, the version lookup, logging, and default paths.
//! `AppConfig` is the root configuration struct containing all settings.
//! Every section is optional, so an empty file (or no file at all) yields a
//! working configuration.

use const_format::formatcp;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

// =============================================================================
// HTTP Paths
// =============================================================================

/// Liveness endpoint path
pub const HEALTH_PATH: &str = "/health";

/// Root path, redirected to the liveness endpoint
pub const ROOT_PATH: &str = "/";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// The health payload embeds the deployed version. A cached copy would report a
// stale version after a redeploy, so upstream caches must never store it.

pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Version Lookup
// =============================================================================

/// Fixed availability marker reported by the health endpoint
pub const HEALTH_STATUS_OK: &str = "ok";

/// Environment variable holding the deployed commit hash
pub const DEFAULT_VERSION_ENV: &str = "GIT_SHA";

/// Version reported when the environment variable is unset or empty
pub const DEFAULT_VERSION: &str = "dev";

// =============================================================================
// HTTP Server Defaults
// =============================================================================

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Seconds to wait for in-flight connections on SIGTERM/SIGINT
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str =
    formatcp!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME"));

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Health endpoint settings
    #[serde(default)]
    pub health: HealthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for connection draining on shutdown
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }
}

/// Where the health endpoint finds its version identifier.
///
/// The variable is looked up on every request; only its name is configured here.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    /// Name of the environment variable holding the version
    #[serde(default = "HealthConfig::default_version_env")]
    pub version_env: String,
    /// Version reported when the variable is unset or empty
    #[serde(default = "HealthConfig::default_version")]
    pub default_version: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            version_env: Self::default_version_env(),
            default_version: Self::default_version(),
        }
    }
}

impl HealthConfig {
    fn default_version_env() -> String {
        DEFAULT_VERSION_ENV.to_string()
    }

    fn default_version() -> String {
        DEFAULT_VERSION.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from an explicit path, or from the default path if it exists,
    /// falling back to built-in defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_or_fallback(path, Path::new(DEFAULT_CONFIG_PATH))
    }

    fn load_or_fallback(path: Option<&str>, default_path: &Path) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if default_path.exists() => Self::load(default_path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let var = &self.health.version_env;
        if var.is_empty() || var.contains('=') || var.contains('\0') {
            return Err(ConfigError::Validation(format!(
                "health.version_env must be a valid environment variable name, got {:?}",
                var
            )));
        }

        if self.health.default_version.is_empty() {
            return Err(ConfigError::Validation(
                "health.default_version must not be empty".to_string(),
            ));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got {:?}",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.http.host.parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid http.host {:?}: {}", self.http.host, e))
        })?;
        Ok(SocketAddr::new(ip, self.http.port))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.http.shutdown_grace_seconds, DEFAULT_SHUTDOWN_GRACE_SECS);
        assert_eq!(config.health.version_env, "GIT_SHA");
        assert_eq!(config.health.default_version, "dev");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            port = 9000

            [health]
            version_env = "BUILD_SHA"
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.health.version_env, "BUILD_SHA");
        assert_eq!(config.health.default_version, "dev");
    }

    #[test]
    fn test_json_logging() {
        let config = AppConfig::from_toml("[logging]\nformat = \"json\"").unwrap();
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_bad_version_env() {
        for name in [r#""""#, r#""A=B""#, r#""A\u0000B""#] {
            let toml = format!("[health]\nversion_env = {}", name);
            let err = AppConfig::from_toml(&toml).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "{}", name);
        }
    }

    #[test]
    fn test_rejects_empty_default_version() {
        let err = AppConfig::from_toml("[health]\ndefault_version = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = AppConfig::from_toml("[http\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"127.0.0.1\"\nport = 3001").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:3001".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let err = AppConfig::load_or_default(Some("/nonexistent/heartbeat.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_missing_default_file_uses_builtin_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("config").join("default.toml");

        let config = AppConfig::load_or_fallback(None, &default_path).unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.health.version_env, DEFAULT_VERSION_ENV);
    }

    #[test]
    fn test_existing_default_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.toml");
        std::fs::write(&default_path, "[http]\nport = 4242\n").unwrap();

        let config = AppConfig::load_or_fallback(None, &default_path).unwrap();
        assert_eq!(config.http.port, 4242);
    }

    #[test]
    fn test_explicit_path_wins_over_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.toml");
        let explicit_path = dir.path().join("explicit.toml");
        std::fs::write(&default_path, "[http]\nport = 4242\n").unwrap();
        std::fs::write(&explicit_path, "[http]\nport = 4343\n").unwrap();

        let config =
            AppConfig::load_or_fallback(explicit_path.to_str(), &default_path).unwrap();
        assert_eq!(config.http.port, 4343);
    }

    #[test]
    fn test_invalid_host() {
        let config = AppConfig::from_toml("[http]\nhost = \"not an ip\"").unwrap();
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_log_filter_names_crate() {
        assert_eq!(DEFAULT_LOG_FILTER, "heartbeat=debug,tower_http=debug");
    }
}
