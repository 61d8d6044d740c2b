//! Task records as served by the task API.
//!
//! The server owns every task; the client only deserializes them. Status and
//! priority are closed sets on paper but the wire carries plain strings, so
//! both enums keep unrecognised values verbatim instead of rejecting the
//! whole task list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use std::fmt;

/// Opaque task identifier: a string or a number on the wire.
///
/// Numbers are kept as JSON numbers, so floats and integers beyond `i64`
/// survive and print back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(Number),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        TaskId::Text(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        TaskId::Text(value)
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        TaskId::Number(value.into())
    }
}

impl TaskId {
    /// Compares ids by their textual form, so `7` typed on the command line
    /// matches a numeric id `7` from the server.
    pub fn matches(&self, other: &TaskId) -> bool {
        self == other || self.to_string() == other.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Todo,
    InProgress,
    Done,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::Done => "done",
            Status::Other(s) => s,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Other(String::new())
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "todo" => Status::Todo,
            "in_progress" => Status::InProgress,
            "done" => Status::Done,
            _ => Status::Other(value),
        }
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Other(s) => s,
        }
    }

    /// Badge colour for this priority.
    pub fn color(&self) -> PriorityColor {
        match self {
            Priority::High => PriorityColor::Red,
            Priority::Medium => PriorityColor::Amber,
            Priority::Low => PriorityColor::Green,
            Priority::Other(_) => PriorityColor::Gray,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Other(String::new())
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(value),
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed display colour of a priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityColor {
    Red,
    Amber,
    Green,
    Gray,
}

impl PriorityColor {
    /// Reference colour of the badge; terminals use [`Self::style_spec`].
    #[cfg(test)]
    fn hex(self) -> &'static str {
        match self {
            PriorityColor::Red => "#ef4444",
            PriorityColor::Amber => "#f59e0b",
            PriorityColor::Green => "#10b981",
            PriorityColor::Gray => "#6b7280",
        }
    }

    /// Foreground style for `prettytable` cells.
    pub fn style_spec(self) -> &'static str {
        match self {
            PriorityColor::Red => "Fr",
            PriorityColor::Amber => "Fy",
            PriorityColor::Green => "Fg",
            PriorityColor::Gray => "FD",
        }
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Task {
    /// Assignee to display; empty strings count as unset.
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref().filter(|s| !s.is_empty())
    }

    /// Due date to display; empty strings count as unset.
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref().filter(|s| !s.is_empty())
    }
}

/// Extracts the task list from the body of `GET {api_url}`.
///
/// The body must be JSON. A body without a `tasks` field (or with `null`, or
/// one that is not an object at all) yields an empty list.
pub fn parse_task_list(body: &str) -> serde_json::Result<Vec<Task>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value.get("tasks") {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(tasks) => Vec::<Task>::deserialize(tasks),
    }
}
