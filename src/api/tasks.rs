//! HTTP implementation of [`TaskApi`](super::TaskApi) on top of `reqwest`.

use super::TaskApi;
use crate::libs::config::{Config, API_KEY_HEADER};
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::task::{parse_task_list, Task, TaskId};
use crate::msg_warning;
use reqwest::{Client, StatusCode};

/// Task API client bound to one base URL and API key.
///
/// No timeout and no retry are configured: a request either completes or
/// fails once.
#[derive(Debug, Clone)]
pub struct TaskClient {
    client: Client,
    config: Config,
}

impl TaskClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }
}

impl TaskApi for TaskClient {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.config.api_url().clone();
        tracing::debug!(%url, "GET task list");

        let response = self.client.get(url).header(API_KEY_HEADER, self.config.api_key()).send().await?;

        // The status is not checked; whatever JSON comes back is read as a task list.
        let status = response.status();
        if !status.is_success() {
            msg_warning!(Message::TaskFetchUnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let tasks = parse_task_list(&body)?;
        tracing::debug!(count = tasks.len(), "task list received");
        Ok(tasks)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<StatusCode> {
        let url = self.config.task_url(id)?;
        tracing::debug!(%url, "DELETE task");

        let response = self.client.delete(url).header(API_KEY_HEADER, self.config.api_key()).send().await?;

        Ok(response.status())
    }
}
