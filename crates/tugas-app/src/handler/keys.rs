//! Key event handlers for each screen.
//!
//! Keys never mutate state directly; they translate into semantic messages
//! that `update()` dispatches. This is the single registration point for row
//! actions: a control is "bound" by constructing a message carrying the
//! target row id, so stale or duplicated bindings cannot exist.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen, TodoField};

/// Map a key to a semantic message for the current screen.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    // A pending delete confirmation captures all input.
    if state.confirm_delete.is_some() {
        return handle_confirm_key(key);
    }

    match state.screen {
        Screen::TodoForm => handle_todo_form_key(state, key),
        Screen::TaskList => handle_task_list_key(state, key),
        Screen::TaskEditor => handle_editor_key(state, key),
    }
}

fn handle_confirm_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y') | InputKey::Enter => Some(Message::ConfirmDeleteTask),
        InputKey::Char('n') | InputKey::Esc => Some(Message::CancelDeleteTask),
        _ => None,
    }
}

fn handle_todo_form_key(state: &AppState, key: InputKey) -> Option<Message> {
    let row_id = state.focused_row_id();
    match key {
        InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('l') => Some(Message::ShowTaskList),
        InputKey::Enter => Some(Message::AddRowAfter(row_id)),
        InputKey::CharCtrl('d') | InputKey::Delete => Some(Message::RemoveRow(row_id)),
        InputKey::Up => Some(Message::FocusRowUp),
        InputKey::Down => Some(Message::FocusRowDown),
        InputKey::Tab => Some(Message::FocusNextField),
        InputKey::BackTab => Some(Message::FocusPrevField),
        InputKey::Left if state.focus.field == TodoField::Priority => {
            Some(Message::CyclePriority {
                row_id,
                forward: false,
            })
        }
        InputKey::Right if state.focus.field == TodoField::Priority => {
            Some(Message::CyclePriority {
                row_id,
                forward: true,
            })
        }
        InputKey::Char(' ') if state.focus.field == TodoField::Checked => {
            Some(Message::ToggleChecked(row_id))
        }
        InputKey::Char(ch) if state.focus.field == TodoField::Text => {
            Some(Message::RowInput { row_id, ch })
        }
        InputKey::Backspace if state.focus.field == TodoField::Text => {
            Some(Message::RowBackspace(row_id))
        }
        _ => None,
    }
}

fn handle_task_list_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('l') | InputKey::Tab => Some(Message::ShowTodoForm),
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Char('n') => Some(Message::NewTask),
        InputKey::Char('e') | InputKey::Enter => {
            state.task_under_cursor().map(Message::EditTask)
        }
        InputKey::Char('d') | InputKey::Delete => {
            state.task_under_cursor().map(Message::RequestDeleteTask)
        }
        _ => None,
    }
}

fn handle_editor_key(state: &AppState, key: InputKey) -> Option<Message> {
    let field = state.editor.as_ref()?.field;
    match key {
        InputKey::Esc => Some(Message::CancelEditor),
        InputKey::Enter => Some(Message::SubmitEditor),
        InputKey::Tab | InputKey::Down => Some(Message::EditorNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::EditorPrevField),
        InputKey::Left if field.is_selector() => {
            Some(Message::EditorCycleOption { forward: false })
        }
        InputKey::Right if field.is_selector() => {
            Some(Message::EditorCycleOption { forward: true })
        }
        InputKey::Char(ch) if !field.is_selector() => Some(Message::EditorInput(ch)),
        InputKey::Backspace if !field.is_selector() => Some(Message::EditorBackspace),
        _ => None,
    }
}
