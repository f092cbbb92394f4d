//! Application state (Model in TEA pattern)

use tugas_core::TaskDraft;

use crate::config::Settings;
use crate::form::TodoForm;
use crate::tasks::TaskStore;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The repeating-row todo form
    #[default]
    TodoForm,
    /// The task table
    TaskList,
    /// The add/edit task form
    TaskEditor,
}

/// Field focus within a todo form row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoField {
    #[default]
    Text,
    Priority,
    Checked,
}

impl TodoField {
    pub fn next(self) -> Self {
        match self {
            TodoField::Text => TodoField::Priority,
            TodoField::Priority => TodoField::Checked,
            TodoField::Checked => TodoField::Text,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            TodoField::Text => TodoField::Checked,
            TodoField::Priority => TodoField::Text,
            TodoField::Checked => TodoField::Priority,
        }
    }
}

/// Focus position on the todo form: row index plus field within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoFocus {
    pub row: usize,
    pub field: TodoField,
}

/// Field focus within the task editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Description,
    Deadline,
    Priority,
    Status,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            EditorField::Title => EditorField::Description,
            EditorField::Description => EditorField::Deadline,
            EditorField::Deadline => EditorField::Priority,
            EditorField::Priority => EditorField::Status,
            EditorField::Status => EditorField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditorField::Title => EditorField::Status,
            EditorField::Description => EditorField::Title,
            EditorField::Deadline => EditorField::Description,
            EditorField::Priority => EditorField::Deadline,
            EditorField::Status => EditorField::Priority,
        }
    }

    /// Selector fields cycle their options instead of taking text input.
    pub fn is_selector(self) -> bool {
        matches!(self, EditorField::Priority | EditorField::Status)
    }
}

/// State of the task editor while it is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub draft: TaskDraft,
    pub field: EditorField,
    /// Aggregated validation messages from the last blocked submit.
    pub errors: Vec<String>,
    /// `Some(id)` when editing an existing task, `None` when adding.
    pub editing: Option<u64>,
}

impl EditorState {
    pub fn new_task() -> Self {
        Self::default()
    }

    pub fn edit_task(id: u64, draft: TaskDraft) -> Self {
        Self {
            draft,
            editing: Some(id),
            ..Self::default()
        }
    }
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub screen: Screen,
    pub todo: TodoForm,
    pub tasks: TaskStore,
    pub focus: TodoFocus,
    /// Selected row index in the task table (display order).
    pub task_cursor: usize,
    /// Editor state while the task editor screen is open.
    pub editor: Option<EditorState>,
    /// Task id pending delete confirmation.
    pub confirm_delete: Option<u64>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(todo: TodoForm, tasks: TaskStore, settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            screen: Screen::TodoForm,
            todo,
            tasks,
            focus: TodoFocus::default(),
            task_cursor: 0,
            editor: None,
            confirm_delete: None,
            settings,
        }
    }

    /// Id of the focused todo row. Focus is clamped to the collection, which
    /// is never empty, so this always resolves.
    pub fn focused_row_id(&self) -> u64 {
        let index = self.focus.row.min(self.todo.len() - 1);
        self.todo.rows()[index].id
    }

    /// Id of the task under the table cursor, in display order.
    pub fn task_under_cursor(&self) -> Option<u64> {
        self.tasks.list().get(self.task_cursor).map(|t| t.id)
    }

    /// Keep focus and cursor within bounds after a mutation.
    pub fn clamp_cursors(&mut self) {
        if self.focus.row >= self.todo.len() {
            self.focus.row = self.todo.len() - 1;
        }
        let task_count = self.tasks.len();
        if self.task_cursor >= task_count {
            self.task_cursor = task_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotStore;
    use tempfile::tempdir;

    fn test_state(temp: &tempfile::TempDir) -> AppState {
        let todo = TodoForm::load(SnapshotStore::new(temp.path()));
        let tasks = TaskStore::load(temp.path());
        AppState::new(todo, tasks, Settings::default())
    }

    #[test]
    fn test_initial_state() {
        let temp = tempdir().unwrap();
        let state = test_state(&temp);
        assert_eq!(state.phase, AppPhase::Running);
        assert_eq!(state.screen, Screen::TodoForm);
        assert_eq!(state.focused_row_id(), 1);
        assert!(state.task_under_cursor().is_none());
    }

    #[test]
    fn test_todo_field_cycling() {
        assert_eq!(TodoField::Text.next(), TodoField::Priority);
        assert_eq!(TodoField::Checked.next(), TodoField::Text);
        for f in [TodoField::Text, TodoField::Priority, TodoField::Checked] {
            assert_eq!(f.next().prev(), f);
        }
    }

    #[test]
    fn test_editor_field_cycling() {
        let mut field = EditorField::Title;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, EditorField::Title);
        assert!(EditorField::Priority.is_selector());
        assert!(!EditorField::Deadline.is_selector());
    }

    #[test]
    fn test_clamp_cursors_after_shrink() {
        let temp = tempdir().unwrap();
        let mut state = test_state(&temp);
        state.focus.row = 5;
        state.task_cursor = 5;
        state.clamp_cursors();
        assert_eq!(state.focus.row, 0);
        assert_eq!(state.task_cursor, 0);
    }
}
