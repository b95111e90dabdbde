use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::rules::RulesConfig;
use super::server::ServerConfig;
use super::substitution::SubstitutionConfig;
use super::upstream::{UpstreamConfig, UpstreamEndpoint};

/// Main configuration structure for Smart DoH
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Domain suffix lists per site category
    #[serde(default)]
    pub rules: RulesConfig,

    /// Address pool for blocked-domain answers
    #[serde(default)]
    pub substitution: SubstitutionConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. smart-doh.toml in current directory
    /// 3. /etc/smart-doh/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(url) = overrides.primary_upstream {
            self.upstream.primary = UpstreamEndpoint {
                name: "custom".to_string(),
                json_url: url.clone(),
                wire_url: url,
            };
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.upstream.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Upstream query timeout cannot be 0".to_string(),
            ));
        }

        let endpoints = std::iter::once(&self.upstream.primary).chain(self.upstream.fallback.iter());
        for endpoint in endpoints {
            for url in [&endpoint.json_url, &endpoint.wire_url] {
                if !url.starts_with("https://") && !url.starts_with("http://") {
                    return Err(ConfigError::Validation(format!(
                        "Upstream '{}' has invalid URL: {}",
                        endpoint.name, url
                    )));
                }
            }
        }

        self.rules
            .to_rule_set()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        self.substitution
            .to_address_pool()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if self.cache.enabled && self.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "Cache max_entries cannot be 0 when the cache is enabled".to_string(),
            ));
        }
        if self.cache.min_ttl > self.cache.max_ttl {
            return Err(ConfigError::Validation(format!(
                "Cache min_ttl ({}) exceeds max_ttl ({})",
                self.cache.min_ttl, self.cache.max_ttl
            )));
        }

        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        ["smart-doh.toml", "/etc/smart-doh/config.toml"]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub primary_upstream: Option<String>,
}
