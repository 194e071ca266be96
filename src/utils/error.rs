use thiserror::Error;

/// Every failure the UI can surface to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    GraphQl(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("No signed-in user found in the session")]
    MissingCurrentUser,

    #[error("Tag name must not be empty")]
    EmptyTagName,

    /// A local action of the same kind has not finished yet.
    #[error("{0} is already in progress")]
    Busy(&'static str),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
