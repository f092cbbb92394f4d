//! Todo form row operation handlers.
//!
//! Persistence failures here are recoverable: the in-memory collection stays
//! consistent, the error is logged, and the session continues.

use tugas_core::prelude::*;

use crate::state::{AppState, TodoField};

use super::UpdateResult;

fn log_store_error(op: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!("{op} failed to persist: {e}");
    }
}

pub fn handle_add_row_after(state: &mut AppState, after_id: u64) -> UpdateResult {
    match state.todo.add_row_after(after_id) {
        Ok(new_id) => {
            // Move focus to the new row's text field.
            if let Some(index) = state.todo.position(new_id) {
                state.focus.row = index;
                state.focus.field = TodoField::Text;
            }
        }
        Err(e) => log_store_error("add_row_after", Err(e)),
    }
    UpdateResult::none()
}

pub fn handle_remove_row(state: &mut AppState, row_id: u64) -> UpdateResult {
    log_store_error("remove_row", state.todo.remove_row(row_id));
    state.clamp_cursors();
    UpdateResult::none()
}

pub fn handle_toggle_checked(state: &mut AppState, row_id: u64) -> UpdateResult {
    log_store_error("toggle_checked", state.todo.toggle_checked(row_id));
    UpdateResult::none()
}

pub fn handle_cycle_priority(state: &mut AppState, row_id: u64, forward: bool) -> UpdateResult {
    if let Some(row) = state.todo.row(row_id) {
        let next = if forward {
            row.priority.next()
        } else {
            row.priority.prev()
        };
        log_store_error("set_priority", state.todo.set_priority(row_id, next));
    }
    UpdateResult::none()
}

pub fn handle_row_input(state: &mut AppState, row_id: u64, ch: char) -> UpdateResult {
    if let Some(row) = state.todo.row(row_id) {
        let mut text = row.text.clone();
        text.push(ch);
        log_store_error("set_text", state.todo.set_text(row_id, text));
    }
    UpdateResult::none()
}

pub fn handle_row_backspace(state: &mut AppState, row_id: u64) -> UpdateResult {
    if let Some(row) = state.todo.row(row_id) {
        let mut text = row.text.clone();
        text.pop();
        log_store_error("set_text", state.todo.set_text(row_id, text));
    }
    UpdateResult::none()
}

pub fn handle_focus_row_up(state: &mut AppState) -> UpdateResult {
    state.focus.row = state.focus.row.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_focus_row_down(state: &mut AppState) -> UpdateResult {
    if state.focus.row + 1 < state.todo.len() {
        state.focus.row += 1;
    }
    UpdateResult::none()
}

pub fn handle_focus_next_field(state: &mut AppState) -> UpdateResult {
    state.focus.field = state.focus.field.next();
    UpdateResult::none()
}

pub fn handle_focus_prev_field(state: &mut AppState) -> UpdateResult {
    state.focus.field = state.focus.field.prev();
    UpdateResult::none()
}
