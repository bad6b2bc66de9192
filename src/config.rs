//! Service configuration
use config_crate::{Config as RawConfig, ConfigError, Environment, File};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: Server,
    pub remote_filter: RemoteFilter,
}

/// Service parameters
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub thread_count: usize,
}

/// Remote authoritative filter location
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFilter {
    pub url: String,
}

impl Config {
    /// Creates config from `config/base.toml`, which can be overridden by
    /// environment variables with prefix `CATALOG`
    pub fn new() -> Result<Self, ConfigError> {
        let mut s = RawConfig::new();
        s.merge(File::with_name("config/base"))?;
        s.merge(Environment::with_prefix("CATALOG").separator("_"))?;
        s.try_into()
    }
}
