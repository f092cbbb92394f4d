//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, Screen};

use super::{editor, keys, rows, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message for the event loop to dispatch.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Screen Navigation
        // ─────────────────────────────────────────────────────────
        Message::ShowTodoForm => {
            state.screen = Screen::TodoForm;
            UpdateResult::none()
        }
        Message::ShowTaskList => {
            state.screen = Screen::TaskList;
            state.clamp_cursors();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Todo Form
        // ─────────────────────────────────────────────────────────
        Message::AddRowAfter(after_id) => rows::handle_add_row_after(state, after_id),
        Message::RemoveRow(row_id) => rows::handle_remove_row(state, row_id),
        Message::ToggleChecked(row_id) => rows::handle_toggle_checked(state, row_id),
        Message::CyclePriority { row_id, forward } => {
            rows::handle_cycle_priority(state, row_id, forward)
        }
        Message::RowInput { row_id, ch } => rows::handle_row_input(state, row_id, ch),
        Message::RowBackspace(row_id) => rows::handle_row_backspace(state, row_id),
        Message::FocusRowUp => rows::handle_focus_row_up(state),
        Message::FocusRowDown => rows::handle_focus_row_down(state),
        Message::FocusNextField => rows::handle_focus_next_field(state),
        Message::FocusPrevField => rows::handle_focus_prev_field(state),

        // ─────────────────────────────────────────────────────────
        // Task List
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => editor::handle_cursor_up(state),
        Message::CursorDown => editor::handle_cursor_down(state),
        Message::NewTask => editor::handle_new_task(state),
        Message::EditTask(id) => editor::handle_edit_task(state, id),
        Message::RequestDeleteTask(id) => editor::handle_request_delete(state, id),
        Message::ConfirmDeleteTask => editor::handle_confirm_delete(state),
        Message::CancelDeleteTask => editor::handle_cancel_delete(state),

        // ─────────────────────────────────────────────────────────
        // Task Editor
        // ─────────────────────────────────────────────────────────
        Message::EditorInput(ch) => editor::handle_editor_input(state, ch),
        Message::EditorBackspace => editor::handle_editor_backspace(state),
        Message::EditorNextField => editor::handle_editor_next_field(state),
        Message::EditorPrevField => editor::handle_editor_prev_field(state),
        Message::EditorCycleOption { forward } => {
            editor::handle_editor_cycle_option(state, forward)
        }
        Message::SubmitEditor => editor::handle_submit_editor(state),
        Message::CancelEditor => editor::handle_cancel_editor(state),
    }
}
