use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{AppError, AppResult};

const APP_DIR: &str = "orgadmin";
const ENDPOINT_ENV: &str = "ORGADMIN_GRAPHQL_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub graphql_endpoint: String,
    pub tags_page_size: u32,
    pub request_timeout_secs: u64,
    pub toast_timeout_secs: u64,
    pub start_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graphql_endpoint: "http://localhost:4000/graphql".to_string(),
            tags_page_size: 10,
            request_timeout_secs: 30,
            toast_timeout_secs: 4,
            start_path: "/".to_string(),
        }
    }
}

/// Platform-specific directory that holds `settings.toml` and `session.toml`.
pub fn config_dir() -> AppResult<PathBuf> {
    let dir = if cfg!(any(target_os = "windows", target_os = "macos")) {
        dirs::config_dir()
            .ok_or_else(|| AppError::Settings("Could not find config directory".to_string()))?
            .join(APP_DIR)
    } else {
        // Linux/Unix: $HOME/.orgadmin
        dirs::home_dir()
            .ok_or_else(|| AppError::Settings("Could not find home directory".to_string()))?
            .join(format!(".{}", APP_DIR))
    };
    Ok(dir)
}

impl Settings {
    pub fn settings_path() -> AppResult<PathBuf> {
        Ok(config_dir()?.join("settings.toml"))
    }

    /// Loads settings from disk, falling back to defaults when the file is
    /// absent, then applies the endpoint environment override.
    pub fn load() -> AppResult<Self> {
        let path = Self::settings_path()?;

        let mut settings = if path.exists() {
            let contents = fs::read_to_string(&path)
                .map_err(|e| AppError::Settings(format!("Failed to read settings file: {}", e)))?;
            Self::from_toml(&contents)?
        } else {
            Self::default()
        };

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                settings.graphql_endpoint = endpoint;
            }
        }

        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> AppResult<Self> {
        let settings: Settings = toml::from_str(contents)
            .map_err(|e| AppError::Settings(format!("Failed to parse settings file: {}", e)))?;
        Ok(settings.sanitized())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_timeout(&self) -> Duration {
        Duration::from_secs(self.toast_timeout_secs)
    }

    // A zero page size would stall pagination.
    fn sanitized(mut self) -> Self {
        if self.tags_page_size == 0 {
            self.tags_page_size = Self::default().tags_page_size;
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = Self::default().request_timeout_secs;
        }
        self
    }
}
