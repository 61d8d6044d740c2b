//! # Taskboard - terminal client for a remote task API
//!
//! Lists, filters and deletes tasks served by an HTTP endpoint that is
//! guarded by an API key.
//!
//! ## Features
//!
//! - **Configuration Guard**: nothing runs without a base URL and API key
//! - **Task Board**: one fetch on start, status filters with live counts
//! - **Delete Flow**: confirm, DELETE, then refetch the whole list
//! - **Ordered Updates**: late responses never overwrite newer data
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
