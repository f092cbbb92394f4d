//! End-to-end persistence tests across the app layer.
//!
//! Drives the state machine the way the event loop does and verifies that
//! what lands on disk survives a full reload.

use tempfile::tempdir;

use tugas_app::{
    update, AppState, InputKey, Message, Settings, SnapshotStore, TaskStore, TodoForm,
};
use tugas_core::{Priority, Status};

fn load_state(data_dir: &std::path::Path) -> AppState {
    let todo = TodoForm::load(SnapshotStore::new(data_dir));
    let tasks = TaskStore::load(data_dir);
    AppState::new(todo, tasks, Settings::default())
}

fn dispatch(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

fn type_str(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        dispatch(state, Message::Key(InputKey::Char(ch)));
    }
}

#[test]
fn todo_form_state_survives_restart() {
    let temp = tempdir().unwrap();

    {
        let mut state = load_state(temp.path());
        type_str(&mut state, "beli tinta");
        dispatch(&mut state, Message::Key(InputKey::Enter)); // add row 2
        type_str(&mut state, "cetak laporan");
        dispatch(&mut state, Message::CyclePriority {
            row_id: 2,
            forward: true,
        });
        dispatch(&mut state, Message::ToggleChecked(1));
    }

    // Fresh process: everything restored, allocator reseeded.
    let mut state = load_state(temp.path());
    let rows = state.todo.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text, "beli tinta");
    assert!(rows[0].checked);
    assert_eq!(rows[1].text, "cetak laporan");
    assert_eq!(rows[1].priority, Priority::Sedang);

    // New ids continue past the restored maximum.
    assert_eq!(state.todo.add_row_after(1).unwrap(), 3);
}

#[test]
fn removed_row_stays_removed_after_restart() {
    let temp = tempdir().unwrap();

    {
        let mut state = load_state(temp.path());
        dispatch(&mut state, Message::AddRowAfter(1));
        dispatch(&mut state, Message::AddRowAfter(1));
        dispatch(&mut state, Message::RemoveRow(3));
    }

    let state = load_state(temp.path());
    let ids: Vec<u64> = state.todo.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn tasks_created_through_editor_survive_restart() {
    let temp = tempdir().unwrap();

    {
        let mut state = load_state(temp.path());
        dispatch(&mut state, Message::NewTask);
        for ch in "Presentasi".chars() {
            dispatch(&mut state, Message::EditorInput(ch));
        }
        dispatch(&mut state, Message::EditorNextField); // Description
        dispatch(&mut state, Message::EditorNextField); // Deadline
        for ch in "2025-10-10".chars() {
            dispatch(&mut state, Message::EditorInput(ch));
        }
        dispatch(&mut state, Message::EditorNextField); // Priority
        dispatch(&mut state, Message::EditorCycleOption { forward: true });
        dispatch(&mut state, Message::SubmitEditor);
    }

    let state = load_state(temp.path());
    assert_eq!(state.tasks.len(), 1);
    let task = state.tasks.get(1).unwrap();
    assert_eq!(task.title, "Presentasi");
    assert_eq!(task.priority, Priority::Sedang);
    assert_eq!(task.status, Status::Belum);
}

#[test]
fn both_stores_share_the_data_dir_without_clashing() {
    let temp = tempdir().unwrap();

    {
        let mut state = load_state(temp.path());
        type_str(&mut state, "todo item");
        dispatch(&mut state, Message::NewTask);
        let editor = state.editor.as_mut().unwrap();
        editor.draft.title = "Tugas".to_string();
        editor.draft.deadline = "2025-01-01".to_string();
        dispatch(&mut state, Message::SubmitEditor);
    }

    assert!(temp.path().join("todos.json").exists());
    assert!(temp.path().join("tasks.json").exists());

    let state = load_state(temp.path());
    assert_eq!(state.todo.rows()[0].text, "todo item");
    assert_eq!(state.tasks.get(1).unwrap().title, "Tugas");
}
