use thiserror::Error;

/// Errors raised by the taskboard library.
///
/// Only configuration errors reach the user as such; fetch and delete errors
/// are caught inside [`TaskBoard`](crate::libs::board::TaskBoard) and logged.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("{0} is not set")]
    MissingConfig(&'static str),

    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to load env file {path}: {source}")]
    EnvFile { path: String, source: dotenv::Error },

    #[error("invalid API key header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed task list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl BoardError {
    /// True for errors that mean the board must not be shown at all.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingConfig(_) | Self::InvalidUrl { .. } | Self::EnvFile { .. } | Self::InvalidApiKey(_))
    }
}

pub type Result<T, E = BoardError> = std::result::Result<T, E>;
