/// Every message the client shows to a user or writes to the log.
///
/// Variants carrying data hold the already-formatted pieces (ids, counts,
/// error descriptions) so that the text itself stays in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === BOARD MESSAGES ===
    BoardTitle,
    BoardSubtitle,
    LoadingTasks,
    NoTasksFound,
    FilterChanged(String), // filter label

    // === TASK MESSAGES ===
    ConfirmDeleteTask,
    TaskDeleted(String),               // id
    TaskDeleteCancelled,
    TaskDeleteRejected(String, u16),   // id, HTTP status
    TaskDeleteFailed(String, String),  // id, error
    TaskFetchFailed(String),           // error
    TaskFetchUnexpectedStatus(u16),    // HTTP status
    TaskNotVisible(String),            // id
    StaleFetchDiscarded(u64, u64),     // generation, last applied generation
    LateFetchDiscarded(u64),           // generation

    // === CONFIGURATION MESSAGES ===
    ConfigErrorTitle,
    ConfigMissing,
    ConfigInvalid(String),             // error

    // === INTERACTIVE BOARD MESSAGES ===
    SelectBoardAction,
    SelectFilter,
    SelectTaskToDelete,
    BoardActionFilter,
    BoardActionDelete,
    BoardActionQuit,
    NoTasksToDelete,
    BoardClosed,
}
