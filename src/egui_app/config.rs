use std::path::PathBuf;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                server_url: Some(DEFAULT_SERVER_URL.to_string()),
                storage_path: None,
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `CLIENT_API_URL` and `DATAQUEUE_STORAGE` from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url = std::env::var("CLIENT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let mut builder = AppConfig::builder().server_url(server_url);
        if let Ok(path) = std::env::var("DATAQUEUE_STORAGE") {
            builder = builder.storage_path(path);
        }

        Self::with_builder(builder)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Location of the local storage database
    ///
    /// Falls back to `<data dir>/dataqueue/local.db`, or the temp directory
    /// when the platform has no data directory.
    pub fn storage_path(&self) -> PathBuf {
        if let Some(path) = &self.app.storage_path {
            return path.clone();
        }

        let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        path.push("dataqueue");
        path.push("local.db");
        path
    }
}
