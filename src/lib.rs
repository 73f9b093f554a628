//! Embed Messages — configurable embed formatting for modmail threads.
//!
//! Turns thread messages into chat-embed payloads for six directions
//! (staff/user/system to DM or thread), driven by a small set of typed
//! color and toggle settings.

// Parsing
pub mod boolean;
pub mod color;

// Core types
pub mod config;
pub mod constants;
pub mod embed;
pub mod error;
pub mod host;
pub mod message;
pub mod settings;
pub mod time_utils;

// Formatting
pub mod avatar;
pub mod formatter;
pub mod plugin;
pub mod registry;
pub mod tracing_init;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-exports for convenience
pub use error::{EmbedError, EmbedResult};
pub use formatter::{Direction, Formatter};
pub use plugin::EmbedMessages;
