//! Server configuration loaded from `life-config.yaml`.
//!
//! The file is optional and every key has a default, so the server runs
//! out of the box from the repository root. The listen port can be
//! overridden with the `LIFE_PORT` environment variable.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable overriding [`ServerConfig::port`].
pub const PORT_ENV: &str = "LIFE_PORT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value is unusable.
    #[error("invalid server configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LifeConfig {
    /// Static file server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl LifeConfig {
    /// Load configuration from a YAML file at the given path and apply
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if `LIFE_PORT` is not a port number.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string and apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if `LIFE_PORT` is not a port number.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.server.apply_env_overrides()?;
        Ok(config)
    }
}

/// Static file server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// HTML entry point served at `/`.
    #[serde(default = "default_index")]
    pub index: PathBuf,

    /// Directory served under `/public`.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            index: default_index(),
            public_dir: default_public_dir(),
        }
    }
}

impl ServerConfig {
    /// Override the port from `LIFE_PORT` when it is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the variable is set but is not
    /// a valid port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_port_override(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Override the port with `value` if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `value` is not a port number.
    pub fn apply_port_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = value {
            self.port = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                reason: format!("{PORT_ENV}={raw:?} is not a port number: {e}"),
            })?;
        }
        Ok(())
    }

    /// Paths that should exist before serving, paired with a label for
    /// log messages. Missing ones are reported as warnings at startup.
    pub fn missing_paths(&self) -> Vec<(&'static str, &Path)> {
        let mut missing = Vec::new();
        if !self.index.is_file() {
            missing.push(("index", self.index.as_path()));
        }
        if !self.public_dir.is_dir() {
            missing.push(("public_dir", self.public_dir.as_path()));
        }
        missing
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    3000
}

fn default_index() -> PathBuf {
    PathBuf::from("web/index.html")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("web/public")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.index, PathBuf::from("web/index.html"));
        assert_eq!(config.public_dir, PathBuf::from("web/public"));
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8081
  index: "site/home.html"
  public_dir: "site/assets"
"#;
        let config = serde_yml::from_str::<LifeConfig>(yaml).unwrap().server;
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);
        assert_eq!(config.index, PathBuf::from("site/home.html"));
        assert_eq!(config.public_dir, PathBuf::from("site/assets"));
    }

    #[test]
    fn parse_partial_yaml() {
        let config = serde_yml::from_str::<LifeConfig>("server:\n  host: localhost\n")
            .unwrap()
            .server;
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = LifeConfig::parse("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            LifeConfig::parse("server: [unclosed"),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn port_override() {
        let mut config = ServerConfig::default();
        config.apply_port_override(None).unwrap();
        assert_eq!(config.port, 3000);
        config.apply_port_override(Some(" 9090 ")).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut config = ServerConfig::default();
        for raw in ["http", "70000", "-1", ""] {
            assert!(
                matches!(
                    config.apply_port_override(Some(raw)),
                    Err(ConfigError::Invalid { .. })
                ),
                "accepted {raw:?}"
            );
        }
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn reports_missing_paths() {
        let config = ServerConfig {
            index: PathBuf::from("does/not/exist.html"),
            public_dir: PathBuf::from("does/not/exist"),
            ..ServerConfig::default()
        };
        let labels: Vec<_> = config.missing_paths().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["index", "public_dir"]);
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("life-config.yaml");
        if path.exists() {
            let config = LifeConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
