//! Layered server configuration: defaults, then YAML file, then environment
//! variables with the `DEVFOLIO__` prefix (`DEVFOLIO__SERVER__PORT=9000`).

use std::path::Path;

use contact::ContactConfig;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8087,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL; sqlite and postgres are both supported.
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://devfolio.db?mode=rwc".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    /// HS256 secret used to verify bearer tokens issued by the auth provider.
    pub jwt_secret: SecretString,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::from(String::new()),
        }
    }
}

/// Load configuration with the file and environment layered over defaults.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut figment = Figment::new();
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    let config = figment
        .merge(Env::prefixed("DEVFOLIO__").split("__"))
        .extract()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = load(None).unwrap();
        assert_eq!(config.server.port, 8087);
        assert_eq!(config.contact.rate_limit_max_requests, 5);
        assert_eq!(config.contact.rate_limit_window_secs, 900);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            "server:\n  port: 9001\ncontact:\n  rate_limit_max_requests: 2"
        )
        .unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.contact.rate_limit_max_requests, 2);
        // Untouched sections keep their defaults.
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.contact.rate_limit_window_secs, 900);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(file, "server:\n  prot: 9001").unwrap();

        assert!(load(Some(file.path())).is_err());
    }
}
