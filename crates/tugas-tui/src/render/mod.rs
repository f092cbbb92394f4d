//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use tugas_app::{AppState, Screen};

use crate::layout;
use crate::theme;
use crate::widgets::{ConfirmDialog, Header, HelpBar, TaskEditorView, TaskTable, TodoFormView};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the terminal with the background color.
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG)), area);

    let areas = layout::create(area, state.settings.ui.show_help_bar);

    frame.render_widget(Header::new(state.screen), areas.header);

    match state.screen {
        Screen::TodoForm => {
            frame.render_widget(TodoFormView::new(&state.todo, state.focus), areas.body);
        }
        Screen::TaskList => {
            frame.render_widget(
                TaskTable::new(
                    &state.tasks,
                    state.task_cursor,
                    &state.settings.ui.date_format,
                ),
                areas.body,
            );
        }
        Screen::TaskEditor => {
            if let Some(editor) = &state.editor {
                frame.render_widget(TaskEditorView::new(editor), areas.body);
            }
        }
    }

    if state.settings.ui.show_help_bar {
        frame.render_widget(
            HelpBar::new(state.screen).confirming_delete(state.confirm_delete.is_some()),
            areas.help,
        );
    }

    // Delete confirmation renders above everything else.
    if let Some(id) = state.confirm_delete {
        let title = state
            .tasks
            .get(id)
            .map(|t| t.title.as_str())
            .unwrap_or("(unknown task)");
        frame.render_widget(ConfirmDialog::new(title), area);
    }
}
