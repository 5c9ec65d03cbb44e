//! Configuration management for havend.
//!
//! Loads settings from /etc/hostelhaven/ai-service.toml (or a path given on
//! the command line), then applies the `PORT` and `FLASK_DEBUG` environment
//! variables on top (`DEBUG` is accepted when `FLASK_DEBUG` is unset).
//! Read once at startup.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Config file path
pub const CONFIG_PATH: &str = "/etc/hostelhaven/ai-service.toml";

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "PORT";

/// Environment variable enabling debug mode ("true", any case)
pub const DEBUG_ENV: &str = "FLASK_DEBUG";

/// Fallback debug variable, read only when `FLASK_DEBUG` is unset
pub const DEBUG_ENV_ALIAS: &str = "DEBUG";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Debug mode: verbose logging
    #[serde(default)]
    pub debug: bool,

    /// Largest accepted request body
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Per-request deadline in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1 MiB, room for large batches
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            max_body_bytes: default_max_body_bytes(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit newline-delimited JSON instead of plain text
    #[serde(default)]
    pub json: bool,
}

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load from the default path, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_PATH);
        if path.exists() {
            Self::load_from(path)
        } else {
            info!("No config at {}, using defaults", CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Load from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.server.request_timeout_secs == 0 {
            bail!("server.request_timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Apply `PORT` and `FLASK_DEBUG` from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {:?}", PORT_ENV, port))?;
        }
        if let Some(debug) = lookup(DEBUG_ENV).or_else(|| lookup(DEBUG_ENV_ALIAS)) {
            self.server.debug = parse_flag(&debug);
        }
        Ok(())
    }

    /// Address to bind, `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }
}

fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(!config.server.debug);
        assert_eq!(config.server.max_body_bytes, 1024 * 1024);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.logging.json);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServiceConfig::from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.request_timeout_secs, 30);

        let config = ServiceConfig::from_toml("").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(ServiceConfig::from_toml("[server]\nport = \"abc\"\n").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServiceConfig::default();
        config
            .apply_overrides(lookup_from(&[("PORT", "7001"), ("FLASK_DEBUG", "TRUE")]))
            .unwrap();
        assert_eq!(config.server.port, 7001);
        assert!(config.server.debug);

        config
            .apply_overrides(lookup_from(&[("FLASK_DEBUG", "yes")]))
            .unwrap();
        assert!(!config.server.debug);
        assert_eq!(config.server.port, 7001);
    }

    #[test]
    fn test_debug_alias() {
        let mut config = ServiceConfig::default();
        config
            .apply_overrides(lookup_from(&[("DEBUG", "true")]))
            .unwrap();
        assert!(config.server.debug);

        // FLASK_DEBUG wins over the alias
        let mut config = ServiceConfig::default();
        config
            .apply_overrides(lookup_from(&[("FLASK_DEBUG", "False"), ("DEBUG", "true")]))
            .unwrap();
        assert!(!config.server.debug);
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let err = ServiceConfig::from_toml("[server]\nrequest_timeout_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nrequest_timeout_secs = 0").unwrap();
        assert!(ServiceConfig::load_from(file.path()).is_err());

        let config = ServiceConfig::from_toml("[server]\nrequest_timeout_secs = 1\n").unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_no_overrides_leaves_config() {
        let mut config = ServiceConfig::default();
        config.apply_overrides(lookup_from(&[])).unwrap();
        assert_eq!(config.server.port, 5000);
        assert!(!config.server.debug);
    }

    #[test]
    fn test_bad_port_is_error() {
        let mut config = ServiceConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[("PORT", "fivethousand")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(config
            .apply_overrides(lookup_from(&[("PORT", "70000")]))
            .is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\ndebug = true\n\n[logging]\njson = true"
        )
        .unwrap();

        let config = ServiceConfig::load_from(file.path()).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert!(config.server.debug);
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ServiceConfig::load_from(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
