use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{redirect, Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://srv.valo-dev.de/public/jetnews/posts.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Endpoint serving the whole posts feed as JSON.
    pub api_url: String,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            request_timeout_seconds: 10,
            user_agent: format!("posts-core/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RepositoryConfig {
    /// `<config_dir>/jetnews/config.json`
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("jetnews").join("config.json"))
    }

    /// Loads the user config, or falls back to the defaults when it is missing or invalid.
    pub fn load() -> Self {
        let loaded = Self::config_file_path().and_then(|path| Self::from_file(&path));
        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "unable to load repository config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: RepositoryConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<Url, ConfigError> {
        Ok(Url::parse(self.api_url.trim())?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn build_client(&self) -> Result<Client, reqwest::Error> {
        ClientBuilder::new()
            .redirect(redirect::Policy::limited(5))
            .timeout(self.request_timeout())
            .user_agent(self.user_agent.clone())
            .build()
    }
}
