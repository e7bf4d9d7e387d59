//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. The file is optional and
//! sparse: stock defaults cover everything, a user file overrides only the
//! values it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! address = "0.0.0.0"                    # Bind address for the server
//! port = 3080                            # Bind port
//! base_url = "https://andresromero.dev"  # Absolute base for og:image URLs
//!
//! [preview]
//! cache_max_age = 31536000               # Cache-Control max-age for /og
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. A user config file need only specify
/// the values it wants to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Address the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Absolute URL the site is served under. Used to build the `og:image`
    /// URLs embedded in page metadata.
    pub base_url: String,
    /// Preview-image endpoint settings.
    pub preview: PreviewConfig,
}

/// Settings for the `/og` preview-image endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// `max-age` stamped into the `Cache-Control` header of `/og` responses.
    pub cache_max_age: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 3080,
            base_url: "https://andresromero.dev".to_string(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            cache_max_age: 31_536_000,
        }
    }
}

impl SiteConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load an explicitly given config file, or fall back to `config.toml`
    /// in the working directory if present, or stock defaults otherwise.
    ///
    /// An explicit path that does not exist is an error; the implicit
    /// `config.toml` is allowed to be missing.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let implicit = Path::new("config.toml");
                if implicit.exists() {
                    Self::load(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.address.parse::<std::net::IpAddr>().map_err(|_| {
            ConfigError::Validation(format!("address '{}' is not an IP address", self.address))
        })?;
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Validation(format!("base_url: {e}")))?;
        if parsed.host_str().is_none() {
            return Err(ConfigError::Validation(
                "base_url must be an absolute URL with a host".to_string(),
            ));
        }
        Ok(())
    }

    /// `address:port` string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// The documented stock config, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    "\
# andresromero-dev configuration
# All options are optional - the values below are the defaults.

# Bind address and port for the HTTP server.
address = \"0.0.0.0\"
port = 3080

# Absolute URL the site is served under. Pages embed og:image URLs
# (base_url + \"/og?title=...\") in their metadata.
base_url = \"https://andresromero.dev\"

[preview]
# Cache-Control max-age for /og responses. The image is a pure function
# of the title, so long-lived caching is safe.
cache_max_age = 31536000
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "0.0.0.0:3080");
    }

    #[test]
    fn stock_config_round_trips() {
        let config = SiteConfig::from_toml(&stock_config_toml()).unwrap();
        assert_eq!(config.port, SiteConfig::default().port);
        assert_eq!(config.base_url, SiteConfig::default().base_url);
    }

    #[test]
    fn sparse_file_overrides_only_named_values() {
        let config = SiteConfig::from_toml("port = 8080").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.preview.cache_max_age, 31_536_000);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            SiteConfig::from_toml("prot = 8080"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn zero_port_is_rejected() {
        assert!(matches!(
            SiteConfig::from_toml("port = 0"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn relative_base_url_is_rejected() {
        assert!(matches!(
            SiteConfig::from_toml("base_url = \"/just/a/path\""),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn hostname_address_is_rejected() {
        assert!(matches!(
            SiteConfig::from_toml("address = \"localhost\""),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = SiteConfig::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }

    #[test]
    fn explicit_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "port = 4000\nbase_url = \"http://127.0.0.1:4000\"").unwrap();
        let config = SiteConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.base_url, "http://127.0.0.1:4000");
    }
}
