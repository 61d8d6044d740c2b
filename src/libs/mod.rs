//! Core library modules for the taskboard client.
//!
//! ## Modules
//!
//! - **config**: connection settings and the configuration guard
//! - **task**: task records and the priority colour lookup
//! - **filter**: status filter and filter-bar counts
//! - **store**: task list with generation-checked fetch completions
//! - **board**: fetch, filter and delete flow over a [`TaskApi`](crate::api::TaskApi)
//! - **view**: terminal rendering
//! - **prompt**: confirmation prompts
//! - **messages**: user-facing text and output macros
//!
//! ## Usage
//!
//! ```rust
//! use taskboard::libs::filter::StatusFilter;
//! use taskboard::libs::task::parse_task_list;
//!
//! let tasks = parse_task_list(r#"{"tasks": [{"id": 1, "status": "todo"}]}"#)?;
//! assert_eq!(StatusFilter::Todo.apply(&tasks).len(), 1);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod messages;
pub mod prompt;
pub mod store;
pub mod task;
pub mod view;
