//! Credentials file of the CLI.
//!
//! Lives at `<config_dir>/plem/config.toml` unless `--config` points elsewhere and
//! is written by `plem login`.

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use masta::{MastaClient, MastaClientBuilder};
use serde::{Deserialize, Serialize};

/// Error that can occur when reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The TOML was syntactically invalid or missed a key.
    #[error("config file is not valid TOML: {0}")]
    Invalid(#[from] toml::de::Error),
    #[error("config could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// No config directory is known for this platform.
    #[error("no configuration directory found; pass --config")]
    NoConfigDir,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ConfigToml {
    pub server: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub access_token: String,
}

impl Debug for ConfigToml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigToml")
            .field("server", &self.server)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl ConfigToml {
    /// `<config_dir>/plem/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("plem").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(raw.parse()?)
    }

    /// Write the file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Builder preloaded with the stored server and credentials.
    pub fn client_builder(&self) -> MastaClientBuilder {
        let mut builder = MastaClient::builder();
        builder
            .server(&self.server)
            .client_id(&self.client_id)
            .client_secret(&self.client_secret)
            .access_token(&self.access_token)
            .user_agent_extra(concat!("plem/", env!("CARGO_PKG_VERSION")));
        builder
    }
}

impl FromStr for ConfigToml {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = ConfigToml {
            server: "https://example.social".into(),
            client_id: "cid".into(),
            client_secret: "secret".into(),
            access_token: "token".into(),
        };
        config.save(&path).unwrap();
        assert_eq!(ConfigToml::from_file(&path).unwrap(), config);
    }

    #[test]
    fn credentials_are_optional() {
        let config: ConfigToml = r#"server = "https://example.social""#.parse().unwrap();
        assert!(config.access_token.is_empty());
        assert!(config.client_builder().build().is_ok());

        assert!("client_id = \"x\"".parse::<ConfigToml>().is_err());
    }

    #[test]
    fn debug_hides_secrets() {
        let config = ConfigToml {
            server: "https://example.social".into(),
            client_secret: "very-secret".into(),
            access_token: "token-123".into(),
            ..ConfigToml::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("token-123"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ConfigToml::from_file(dir.path().join("nope.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
