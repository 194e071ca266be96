use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::{AppError, AppResult};
use super::settings::config_dir;

/// The signed-in user, read once at startup and provided to the component
/// tree as context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl Session {
    pub fn session_path() -> AppResult<PathBuf> {
        Ok(config_dir()?.join("session.toml"))
    }

    pub fn load() -> AppResult<Self> {
        let path = Self::session_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .map_err(|e| AppError::Settings(format!("Failed to read session file: {}", e)))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> AppResult<Self> {
        let session: Session = toml::from_str(contents)
            .map_err(|e| AppError::Settings(format!("Failed to parse session file: {}", e)))?;
        Ok(session)
    }

    /// The current user id, ignoring blank values.
    pub fn current_user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}
