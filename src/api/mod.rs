//! Client side of the task API.
//!
//! The board talks to the server through the [`TaskApi`] trait so that the
//! fetch and delete flows can run against the real HTTP client
//! ([`TaskClient`]) or against an in-process double in tests.
//!
//! ## Endpoints
//!
//! - `GET {api_url}` returns `{ "tasks": [...] }`
//! - `DELETE {api_url}/{id}` removes one task; only the status is inspected
//!
//! Both carry the API key in the `x-api-key` header.
//!
//! ```rust,no_run
//! use taskboard::api::{TaskApi, TaskClient};
//! use taskboard::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = TaskClient::new(&Config::from_env()?);
//! let tasks = client.list_tasks().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::Result;
use crate::libs::task::{Task, TaskId};
use reqwest::StatusCode;

pub mod tasks;

pub use tasks::TaskClient;

/// Operations the board needs from the server.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    /// Fetches the full task list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body is not a
    /// JSON task list. A body without `tasks` is an empty list, not an error.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Deletes one task and returns the response status.
    ///
    /// A non-success status is returned as `Ok`; only transport failures
    /// are errors.
    async fn delete_task(&self, id: &TaskId) -> Result<StatusCode>;
}
