//! tugas-tui - Terminal UI for tugas
//!
//! This crate provides the ratatui-based terminal interface over the state
//! machine in tugas-app: terminal setup, event polling, rendering, and the
//! main loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
