use super::task::{Status, Task};
use clap::ValueEnum;
use std::fmt;

/// Status selector for the visible part of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Todo,
    #[value(name = "in_progress", alias = "in-progress")]
    InProgress,
    Done,
}

impl StatusFilter {
    /// Filters in filter-bar order.
    pub const ALL: [StatusFilter; 4] = [StatusFilter::All, StatusFilter::Todo, StatusFilter::InProgress, StatusFilter::Done];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Todo => "Todo",
            StatusFilter::InProgress => "In Progress",
            StatusFilter::Done => "Done",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Todo => task.status == Status::Todo,
            StatusFilter::InProgress => task.status == Status::InProgress,
            StatusFilter::Done => task.status == Status::Done,
        }
    }

    /// The tasks this filter shows, in their original order.
    pub fn apply(self, tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }

    pub fn count(self, tasks: &[Task]) -> usize {
        tasks.iter().filter(|task| self.matches(task)).count()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One filter-bar entry: the filter, its live count and whether it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCount {
    pub filter: StatusFilter,
    pub count: usize,
    pub active: bool,
}

/// Counts for every filter, with `active` marked.
pub fn filter_counts(tasks: &[Task], active: StatusFilter) -> Vec<FilterCount> {
    StatusFilter::ALL
        .iter()
        .map(|&filter| FilterCount {
            filter,
            count: filter.count(tasks),
            active: filter == active,
        })
        .collect()
}
