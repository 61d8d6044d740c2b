//! The task board: store, filter and delete flow behind one handle.
//!
//! A [`TaskBoard`] only exists for a validated [`Config`](super::config::Config),
//! so the configuration guard has already run by the time any method here is
//! called.
//!
//! ## Lifecycle
//!
//! 1. **Mount**: [`TaskBoard::mount`] issues the one automatic fetch; until it
//!    settles the board is loading.
//! 2. **Filter**: [`TaskBoard::set_filter`] changes which statuses are
//!    visible; it never touches the task list.
//! 3. **Delete**: [`TaskBoard::delete_task`] confirms, sends the DELETE and,
//!    on success, refetches the whole list. The deleted row disappears only
//!    when that refetch lands.
//! 4. **Unmount**: [`TaskBoard::unmount`] makes the store ignore any fetch
//!    still in flight.
//!
//! Fetch and delete failures are logged and swallowed. A failed fetch keeps
//! the last known list, a failed delete leaves everything as it was.
//!
//! All methods take `&self`, so several fetches may be in flight at once.
//! The store lock is never held across an `.await`.
//!
//! ```rust,no_run
//! use taskboard::api::TaskClient;
//! use taskboard::libs::board::TaskBoard;
//! use taskboard::libs::config::Config;
//! use taskboard::libs::filter::StatusFilter;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let board = TaskBoard::new(TaskClient::new(&Config::from_env()?));
//! board.mount().await;
//! board.set_filter(StatusFilter::Todo);
//! for task in board.snapshot().visible() {
//!     println!("{} {}", task.id, task.title);
//! }
//! # Ok(())
//! # }
//! ```

use super::filter::{filter_counts, FilterCount, StatusFilter};
use super::messages::Message;
use super::prompt::ConfirmPrompt;
use super::store::{FetchOutcome, LoadState, TaskStore};
use super::task::{Task, TaskId};
use crate::api::TaskApi;
use crate::{msg_debug, msg_error};
use parking_lot::Mutex;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicBool, Ordering};

/// Result of [`TaskBoard::delete_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The confirmation was declined; nothing was sent.
    Cancelled,
    /// The server accepted the delete and the list was refetched.
    Deleted(FetchOutcome),
    /// The server answered with a non-success status.
    Rejected(StatusCode),
    /// The request could not be completed.
    Failed,
}

/// Point-in-time copy of what the board would render.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub loading: bool,
    pub tasks: Vec<Task>,
    pub filter: StatusFilter,
}

impl BoardSnapshot {
    pub fn visible(&self) -> Vec<&Task> {
        self.filter.apply(&self.tasks)
    }

    pub fn counts(&self) -> Vec<FilterCount> {
        filter_counts(&self.tasks, self.filter)
    }
}

pub struct TaskBoard<A> {
    api: A,
    store: Mutex<TaskStore>,
    filter: Mutex<StatusFilter>,
    mounted: AtomicBool,
}

impl<A: TaskApi> TaskBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: Mutex::new(TaskStore::new()),
            filter: Mutex::new(StatusFilter::default()),
            mounted: AtomicBool::new(false),
        }
    }

    /// Runs the initial fetch. Only the first call fetches; later calls
    /// return `None`.
    pub async fn mount(&self) -> Option<FetchOutcome> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.fetch_tasks().await)
    }

    /// Fetches the task list and applies it to the store.
    ///
    /// On success the list is replaced; on failure the error is logged and
    /// the list kept. Either way loading ends, unless a newer fetch already
    /// settled or the board was unmounted, in which case the result is
    /// dropped.
    pub async fn fetch_tasks(&self) -> FetchOutcome {
        let generation = self.store.lock().begin_fetch();
        tracing::debug!(%generation, "fetch dispatched");

        let result = self.api.list_tasks().await;

        let mut store = self.store.lock();
        let outcome = match result {
            Ok(tasks) => store.replace(generation, tasks),
            Err(err) => {
                msg_error!(Message::TaskFetchFailed(err.to_string()));
                store.fail(generation)
            }
        };

        match outcome {
            FetchOutcome::Stale => {
                msg_debug!(Message::StaleFetchDiscarded(generation.value(), store.applied_generation()));
            }
            FetchOutcome::Detached => {
                msg_debug!(Message::LateFetchDiscarded(generation.value()));
            }
            FetchOutcome::Replaced | FetchOutcome::KeptAfterFailure => {
                tracing::debug!(%generation, count = store.tasks().len(), "fetch applied");
            }
        }
        outcome
    }

    /// Deletes a task after confirmation, then refetches the list.
    ///
    /// Never returns an error: a declined or failed prompt cancels, a
    /// transport error or a non-success status is logged and reported in
    /// the outcome.
    pub async fn delete_task<P: ConfirmPrompt>(&self, id: &TaskId, prompt: &P) -> DeleteOutcome {
        match prompt.confirm(&Message::ConfirmDeleteTask) {
            Ok(true) => {}
            Ok(false) => return DeleteOutcome::Cancelled,
            Err(err) => {
                tracing::warn!(error = %err, "confirmation prompt failed, not deleting");
                return DeleteOutcome::Cancelled;
            }
        }

        match self.api.delete_task(id).await {
            Ok(status) if status.is_success() => {
                tracing::debug!(%id, status = status.as_u16(), "task deleted, refetching");
                DeleteOutcome::Deleted(self.fetch_tasks().await)
            }
            Ok(status) => {
                msg_error!(Message::TaskDeleteRejected(id.to_string(), status.as_u16()));
                DeleteOutcome::Rejected(status)
            }
            Err(err) => {
                msg_error!(Message::TaskDeleteFailed(id.to_string(), err.to_string()));
                DeleteOutcome::Failed
            }
        }
    }

    /// Drops the board's interest in any fetch still running.
    pub fn unmount(&self) {
        self.store.lock().detach();
    }

    pub fn set_filter(&self, filter: StatusFilter) {
        *self.filter.lock() = filter;
    }

    pub fn filter(&self) -> StatusFilter {
        *self.filter.lock()
    }

    pub fn is_loading(&self) -> bool {
        self.store.lock().is_loading()
    }

    pub fn load_state(&self) -> LoadState {
        self.store.lock().state().clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.lock().tasks().to_vec()
    }

    /// Tasks passing the current filter, in list order.
    pub fn visible(&self) -> Vec<Task> {
        let filter = self.filter();
        self.store.lock().tasks().iter().filter(|task| filter.matches(task)).cloned().collect()
    }

    /// Looks a task up by id, comparing ids by their text.
    pub fn find(&self, id: &TaskId) -> Option<Task> {
        self.store.lock().tasks().iter().find(|task| task.id.matches(id)).cloned()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let filter = self.filter();
        let store = self.store.lock();
        BoardSnapshot {
            loading: store.is_loading(),
            tasks: store.tasks().to_vec(),
            filter,
        }
    }
}
