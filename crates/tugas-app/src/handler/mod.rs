//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key-to-message mapping per screen
//! - `rows`: Todo form row operations
//! - `editor`: Task editor and task list operations

pub(crate) mod editor;
pub(crate) mod keys;
pub(crate) mod rows;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Result of processing a message: an optional follow-up message.
///
/// Key events translate into semantic messages; the event loop feeds the
/// follow-up back through `update()` until none remains.
#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
        }
    }
}
