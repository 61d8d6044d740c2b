//! Display implementation for taskboard messages.
//!
//! All user-facing text is defined here, in one match, so that wording stays
//! consistent between the rendered board, the interactive prompts and the log.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into human-readable text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskboard::libs::messages::Message;
    ///
    /// assert_eq!(Message::NoTasksFound.to_string(), "No tasks found");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === BOARD MESSAGES ===
            Message::BoardTitle => "🎯 AgentCore Task Manager".to_string(),
            Message::BoardSubtitle => "DevOps Assistant Tasks".to_string(),
            Message::LoadingTasks => "Loading tasks...".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::FilterChanged(label) => format!("Showing: {}", label),

            // === TASK MESSAGES ===
            Message::ConfirmDeleteTask => "Delete this task?".to_string(),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskDeleteCancelled => "Deletion cancelled".to_string(),
            Message::TaskDeleteRejected(id, status) => format!("Failed to delete task {} (HTTP {})", id, status),
            Message::TaskDeleteFailed(id, error) => format!("Error deleting task {}: {}", id, error),
            Message::TaskFetchFailed(error) => format!("Error fetching tasks: {}", error),
            Message::TaskFetchUnexpectedStatus(status) => format!("Task list answered with HTTP {}, reading the body anyway", status),
            Message::TaskNotVisible(id) => format!("Task {} is not on the board", id),
            Message::StaleFetchDiscarded(generation, applied) => {
                format!("Discarding fetch #{} (already showing #{})", generation, applied)
            }
            Message::LateFetchDiscarded(generation) => format!("Discarding fetch #{} that finished after the board closed", generation),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigErrorTitle => "Configuration Error".to_string(),
            Message::ConfigMissing => "TASKBOARD_API_URL and TASKBOARD_API_KEY must be set".to_string(),
            Message::ConfigInvalid(error) => format!("Configuration rejected: {}", error),

            // === INTERACTIVE BOARD MESSAGES ===
            Message::SelectBoardAction => "What next?".to_string(),
            Message::SelectFilter => "Show tasks".to_string(),
            Message::SelectTaskToDelete => "Select a task to delete".to_string(),
            Message::BoardActionFilter => "Change filter".to_string(),
            Message::BoardActionDelete => "Delete a task".to_string(),
            Message::BoardActionQuit => "Quit".to_string(),
            Message::NoTasksToDelete => "There are no visible tasks to delete".to_string(),
            Message::BoardClosed => "Bye!".to_string(),
        };

        write!(f, "{}", text)
    }
}
