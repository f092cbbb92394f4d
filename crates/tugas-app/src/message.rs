//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Todo Form Messages (carry the target row's id)
    // ─────────────────────────────────────────────────────────
    /// Insert a fresh row immediately after this row
    AddRowAfter(u64),
    /// Remove this row (the last surviving row is cleared instead)
    RemoveRow(u64),
    /// Flip this row's checkbox
    ToggleChecked(u64),
    /// Cycle this row's priority selector forward/backward
    CyclePriority { row_id: u64, forward: bool },
    /// Append a character to this row's text field
    RowInput { row_id: u64, ch: char },
    /// Delete the last character of this row's text field
    RowBackspace(u64),
    /// Move row focus up/down
    FocusRowUp,
    FocusRowDown,
    /// Move focus to the next/previous field within the focused row
    FocusNextField,
    FocusPrevField,

    // ─────────────────────────────────────────────────────────
    // Screen Navigation
    // ─────────────────────────────────────────────────────────
    ShowTodoForm,
    ShowTaskList,

    // ─────────────────────────────────────────────────────────
    // Task List Messages
    // ─────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,
    /// Open the editor with a blank draft
    NewTask,
    /// Open the editor prefilled from this task
    EditTask(u64),
    /// Ask for confirmation before deleting this task
    RequestDeleteTask(u64),
    ConfirmDeleteTask,
    CancelDeleteTask,

    // ─────────────────────────────────────────────────────────
    // Task Editor Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the focused editor field
    EditorInput(char),
    /// Delete the last character of the focused editor field
    EditorBackspace,
    EditorNextField,
    EditorPrevField,
    /// Cycle the focused selector field (priority/status)
    EditorCycleOption { forward: bool },
    /// Validate the draft; save and return to the list when clean
    SubmitEditor,
    /// Discard the draft and return to the list
    CancelEditor,
}
