//! tugas-app - Application state and orchestration for tugas
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the model ([`AppState`]), the messages ([`Message`]), and the
//! update function ([`handler::update`]). It also owns persistence: the todo
//! form's snapshot store, the task store, and the settings layer.

pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod snapshot;
pub mod state;
pub mod tasks;

// Re-export primary types
pub use config::Settings;
pub use form::TodoForm;
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use snapshot::SnapshotStore;
pub use state::{AppPhase, AppState, EditorField, EditorState, Screen, TodoField, TodoFocus};
pub use tasks::TaskStore;
