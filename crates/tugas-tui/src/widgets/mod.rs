//! Widget implementations for the tugas TUI

pub mod confirm_dialog;
pub mod header;
pub mod help_bar;
pub mod task_editor;
pub mod task_table;
pub mod todo_form;

pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use help_bar::HelpBar;
pub use task_editor::TaskEditorView;
pub use task_table::TaskTable;
pub use todo_form::TodoFormView;
