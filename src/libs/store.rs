//! In-memory task list and its load lifecycle.
//!
//! The store never patches the list: a completed fetch either replaces it
//! wholesale or leaves it exactly as it was. Each fetch takes a
//! [`Generation`] when it is dispatched and hands it back on completion;
//! completions older than the last applied one are dropped, so requests that
//! resolve out of order cannot roll the list back.

use super::task::Task;
use std::fmt;

/// Sequence number of a fetch, taken at dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The first fetch has not settled yet.
    Loading,
    /// The last applied fetch succeeded with these tasks.
    Loaded(Vec<Task>),
    /// The last applied fetch failed; the tasks are the last known list.
    Failed(Vec<Task>),
}

/// What a fetch completion did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Replaced,
    KeptAfterFailure,
    /// A newer fetch had already been applied.
    Stale,
    /// The board was unmounted before the fetch finished.
    Detached,
}

#[derive(Debug)]
pub struct TaskStore {
    state: LoadState,
    issued: u64,
    applied: u64,
    detached: bool,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            issued: 0,
            applied: 0,
            detached: false,
        }
    }

    /// Registers a new fetch and returns its generation.
    pub fn begin_fetch(&mut self) -> Generation {
        self.issued += 1;
        Generation(self.issued)
    }

    /// Applies a successful fetch.
    pub fn replace(&mut self, generation: Generation, tasks: Vec<Task>) -> FetchOutcome {
        if let Some(rejected) = self.reject(generation) {
            return rejected;
        }
        self.applied = generation.0;
        self.state = LoadState::Loaded(tasks);
        FetchOutcome::Replaced
    }

    /// Applies a failed fetch: the list is kept and loading ends.
    pub fn fail(&mut self, generation: Generation) -> FetchOutcome {
        if let Some(rejected) = self.reject(generation) {
            return rejected;
        }
        self.applied = generation.0;
        let last_known = match std::mem::replace(&mut self.state, LoadState::Loading) {
            LoadState::Loading => Vec::new(),
            LoadState::Loaded(tasks) | LoadState::Failed(tasks) => tasks,
        };
        self.state = LoadState::Failed(last_known);
        FetchOutcome::KeptAfterFailure
    }

    fn reject(&self, generation: Generation) -> Option<FetchOutcome> {
        if self.detached {
            Some(FetchOutcome::Detached)
        } else if generation.0 <= self.applied {
            Some(FetchOutcome::Stale)
        } else {
            None
        }
    }

    /// Stops accepting completions.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        match &self.state {
            LoadState::Loading => &[],
            LoadState::Loaded(tasks) | LoadState::Failed(tasks) => tasks,
        }
    }

    /// Generation of the last applied completion.
    pub fn applied_generation(&self) -> u64 {
        self.applied
    }
}
