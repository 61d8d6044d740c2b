//! Connection settings for the task API.
//!
//! The client needs exactly two values: the base URL of the task collection
//! and the API key sent as `x-api-key` on every request. They are resolved
//! once at startup, from command-line flags first and then from the
//! environment (optionally seeded from a `.env` file), into a [`Config`].
//!
//! Building a `Config` is the configuration guard: if either value is
//! missing or empty, or the URL is not an absolute http(s) URL, no `Config`
//! exists and therefore no board, no request and no rendering of tasks.
//!
//! ```rust,no_run
//! use taskboard::libs::config::Config;
//!
//! Config::load_env_file(None)?;
//! let config = Config::resolve(None, None)?;
//! println!("Using {}", config.api_url());
//! # Ok::<(), taskboard::libs::error::BoardError>(())
//! ```

use super::error::{BoardError, Result};
use super::task::TaskId;
use reqwest::header::HeaderValue;
use reqwest::Url;
use std::env;
use std::fmt;
use std::path::Path;

/// Environment variable holding the task collection URL.
pub const API_URL_VAR: &str = "TASKBOARD_API_URL";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "TASKBOARD_API_KEY";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Validated connection settings.
#[derive(Clone)]
pub struct Config {
    api_url: Url,
    api_key: String,
}

impl Config {
    /// Validates a base URL and API key.
    ///
    /// # Errors
    ///
    /// - [`BoardError::MissingConfig`] if either value is empty
    /// - [`BoardError::InvalidUrl`] if the URL does not parse or is not http(s)
    /// - [`BoardError::InvalidApiKey`] if the key cannot be sent as a header
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        if api_url.is_empty() {
            return Err(BoardError::MissingConfig(API_URL_VAR));
        }
        if api_key.is_empty() {
            return Err(BoardError::MissingConfig(API_KEY_VAR));
        }

        let url = Url::parse(api_url).map_err(|e| BoardError::InvalidUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BoardError::InvalidUrl {
                url: api_url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        HeaderValue::from_str(api_key)?;

        Ok(Self {
            api_url: url,
            api_key: api_key.to_string(),
        })
    }

    /// Resolves the settings from explicit values, falling back to
    /// [`API_URL_VAR`] and [`API_KEY_VAR`] for whatever is not given.
    pub fn resolve(api_url: Option<String>, api_key: Option<String>) -> Result<Self> {
        let api_url = api_url.or_else(|| env::var(API_URL_VAR).ok()).unwrap_or_default();
        let api_key = api_key.or_else(|| env::var(API_KEY_VAR).ok()).unwrap_or_default();
        Self::new(&api_url, &api_key)
    }

    /// Reads the settings from the environment only.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, None)
    }

    /// Loads variables from a `.env` file without overriding variables that
    /// are already set.
    ///
    /// With no path, `.env` is looked up from the working directory upwards
    /// and its absence is not an error. An explicit path must exist.
    pub fn load_env_file(path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                dotenv::from_path(path).map_err(|source| BoardError::EnvFile {
                    path: path.display().to_string(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "loaded env file");
            }
            None => {
                if let Ok(found) = dotenv::dotenv() {
                    tracing::debug!(path = %found.display(), "loaded env file");
                }
            }
        }
        Ok(())
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// URL addressing a single task: the base URL with the id appended as
    /// one escaped path segment.
    pub fn task_url(&self, id: &TaskId) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| BoardError::InvalidUrl {
                url: self.api_url.to_string(),
                reason: "cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &"***")
            .finish()
    }
}
