//! The add/edit task form.
//!
//! One line per field with the focused field highlighted. Selector fields
//! render as `‹value›`; text fields show a trailing cursor when focused.
//! Blocked submits show the aggregated validation messages underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use tugas_app::{EditorField, EditorState};

use crate::theme;

pub struct TaskEditorView<'a> {
    editor: &'a EditorState,
}

impl<'a> TaskEditorView<'a> {
    pub fn new(editor: &'a EditorState) -> Self {
        Self { editor }
    }

    fn field_line(&self, field: EditorField, label: &str, value: &str) -> Line<'static> {
        let focused = self.editor.field == field;
        let style = if focused { theme::focused() } else { theme::text() };

        let rendered = if field.is_selector() {
            format!("‹{value}›")
        } else {
            let mut v = value.to_string();
            if focused {
                v.push('_');
            }
            v
        };

        Line::from(vec![
            Span::styled(format!("{label:<12}"), theme::muted()),
            Span::styled(rendered, style),
        ])
    }
}

impl Widget for TaskEditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let draft = &self.editor.draft;
        let title = if self.editor.editing.is_some() {
            " Edit Task "
        } else {
            " New Task "
        };

        let mut lines = vec![
            self.field_line(EditorField::Title, "Title", &draft.title),
            self.field_line(EditorField::Description, "Description", &draft.description),
            self.field_line(EditorField::Deadline, "Deadline", &draft.deadline),
            self.field_line(EditorField::Priority, "Priority", &draft.priority),
            self.field_line(EditorField::Status, "Status", &draft.status),
        ];

        if !self.editor.errors.is_empty() {
            lines.push(Line::default());
            for error in &self.editor.errors {
                lines.push(Line::from(Span::styled(
                    format!("• {error}"),
                    theme::error(),
                )));
            }
        }

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme::muted());
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(editor: &EditorState) -> String {
        let backend = TestBackend::new(70, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(TaskEditorView::new(editor), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_new_task_shows_defaults() {
        let editor = EditorState::new_task();
        let content = render_to_string(&editor);
        assert!(content.contains("New Task"));
        assert!(content.contains("Rendah"));
        assert!(content.contains("Belum"));
    }

    #[test]
    fn test_errors_are_listed() {
        let mut editor = EditorState::new_task();
        editor.errors = vec![
            "Title is required.".to_string(),
            "Deadline must be a valid date (YYYY-MM-DD).".to_string(),
        ];
        let content = render_to_string(&editor);
        assert!(content.contains("Title is required."));
        assert!(content.contains("valid date"));
    }

    #[test]
    fn test_edit_title_changes_block_title() {
        let editor = EditorState::edit_task(3, Default::default());
        assert!(render_to_string(&editor).contains("Edit Task"));
    }
}
