#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::transport::DEFAULT_BASE_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::notify::DEFAULT_TOAST_DURATION;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

/// Resolved client settings: explicit overrides, then the config file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub toast_duration: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl ApiConfig {
    pub fn resolve(file: Option<&TomlConfig>, base_url_override: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file) = file {
            file.validate()?;
            if let Some(url) = &file.api.base_url {
                config.base_url = url.clone();
            }
            if let Some(seconds) = file.ui.toast_seconds {
                config.toast_duration = Duration::from_secs(seconds);
            }
        }

        if let Some(url) = base_url_override {
            config.base_url = url.to_string();
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_range("ui.toast_seconds", self.toast_duration.as_secs(), 1, 60)
    }
}

impl ConfigProvider for ApiConfig {
    fn api_base_url(&self) -> &str {
        &self.base_url
    }

    fn toast_duration(&self) -> Duration {
        self.toast_duration
    }
}
