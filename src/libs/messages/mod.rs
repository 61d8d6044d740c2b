//! User-facing text for the taskboard client.
//!
//! Every string the client prints lives in the [`Message`] enum and is turned
//! into text by its `Display` impl in [`display`]. The [`macros`] module routes
//! messages either to the console or to `tracing`, depending on debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
