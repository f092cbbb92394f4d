//! Task list and task editor handlers.

use tugas_core::prelude::*;
use tugas_core::{Priority, Status, TaskDraft};

use crate::state::{AppState, EditorField, EditorState, Screen};

use super::UpdateResult;

// ─────────────────────────────────────────────────────────
// Task list
// ─────────────────────────────────────────────────────────

pub fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    state.task_cursor = state.task_cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    if state.task_cursor + 1 < state.tasks.len() {
        state.task_cursor += 1;
    }
    UpdateResult::none()
}

pub fn handle_new_task(state: &mut AppState) -> UpdateResult {
    state.editor = Some(EditorState::new_task());
    state.screen = Screen::TaskEditor;
    UpdateResult::none()
}

pub fn handle_edit_task(state: &mut AppState, id: u64) -> UpdateResult {
    let Some(task) = state.tasks.get(id) else {
        warn!("edit requested for unknown task {id}");
        return UpdateResult::none();
    };
    state.editor = Some(EditorState::edit_task(id, TaskDraft::from_task(task)));
    state.screen = Screen::TaskEditor;
    UpdateResult::none()
}

pub fn handle_request_delete(state: &mut AppState, id: u64) -> UpdateResult {
    if state.tasks.get(id).is_some() {
        state.confirm_delete = Some(id);
    }
    UpdateResult::none()
}

pub fn handle_confirm_delete(state: &mut AppState) -> UpdateResult {
    if let Some(id) = state.confirm_delete.take() {
        if let Err(e) = state.tasks.delete(id) {
            warn!("delete task {id} failed: {e}");
        }
        state.clamp_cursors();
    }
    UpdateResult::none()
}

pub fn handle_cancel_delete(state: &mut AppState) -> UpdateResult {
    state.confirm_delete = None;
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Task editor
// ─────────────────────────────────────────────────────────

pub fn handle_editor_input(state: &mut AppState, ch: char) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        focused_field_mut(editor).push(ch);
    }
    UpdateResult::none()
}

pub fn handle_editor_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        focused_field_mut(editor).pop();
    }
    UpdateResult::none()
}

pub fn handle_editor_next_field(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.field = editor.field.next();
    }
    UpdateResult::none()
}

pub fn handle_editor_prev_field(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.field = editor.field.prev();
    }
    UpdateResult::none()
}

pub fn handle_editor_cycle_option(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        match editor.field {
            EditorField::Priority => {
                let current: Priority = editor.draft.priority.parse().unwrap_or_default();
                let next = if forward { current.next() } else { current.prev() };
                editor.draft.priority = next.to_string();
            }
            EditorField::Status => {
                let current: Status = editor.draft.status.parse().unwrap_or_default();
                let next = if forward { current.next() } else { current.prev() };
                editor.draft.status = next.to_string();
            }
            _ => {}
        }
    }
    UpdateResult::none()
}

/// Validate and save the draft. A draft with violations never reaches the
/// store: the aggregated messages are shown and the editor stays open.
pub fn handle_submit_editor(state: &mut AppState) -> UpdateResult {
    let Some(editor) = state.editor.as_ref() else {
        return UpdateResult::none();
    };
    let editing = editor.editing;

    match editor.draft.build(editing.unwrap_or(0)) {
        Ok(task) => {
            let result = match editing {
                Some(id) => state.tasks.update(id, task),
                None => state.tasks.create(task).map(|_| ()),
            };
            if let Err(e) = result {
                warn!("saving task failed: {e}");
                if let Some(editor) = state.editor.as_mut() {
                    editor.errors = vec![format!("Could not save the task: {e}")];
                }
                return UpdateResult::none();
            }
            state.editor = None;
            state.screen = Screen::TaskList;
            state.clamp_cursors();
        }
        Err(errors) => {
            debug!("submit blocked: {} validation errors", errors.len());
            if let Some(editor) = state.editor.as_mut() {
                editor.errors = errors;
            }
        }
    }
    UpdateResult::none()
}

pub fn handle_cancel_editor(state: &mut AppState) -> UpdateResult {
    state.editor = None;
    state.screen = Screen::TaskList;
    UpdateResult::none()
}

fn focused_field_mut(editor: &mut EditorState) -> &mut String {
    match editor.field {
        EditorField::Title => &mut editor.draft.title,
        EditorField::Description => &mut editor.draft.description,
        EditorField::Deadline => &mut editor.draft.deadline,
        // Selector fields never take text input; the key handler filters
        // these out, but route them somewhere harmless regardless.
        EditorField::Priority => &mut editor.draft.priority,
        EditorField::Status => &mut editor.draft.status,
    }
}
