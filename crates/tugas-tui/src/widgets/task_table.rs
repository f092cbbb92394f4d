//! The task table: tasks ordered by deadline ascending.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Row as TableRow, Table, Widget},
};

use tugas_app::TaskStore;
use tugas_core::Task;

use crate::theme;

pub struct TaskTable<'a> {
    store: &'a TaskStore,
    cursor: usize,
    date_format: &'a str,
}

impl<'a> TaskTable<'a> {
    pub fn new(store: &'a TaskStore, cursor: usize, date_format: &'a str) -> Self {
        Self {
            store,
            cursor,
            date_format,
        }
    }

    fn task_row(&self, index: usize, task: &Task) -> TableRow<'static> {
        let row = TableRow::new(vec![
            Cell::from(task.title.clone()),
            Cell::from(Span::styled(task.description.clone(), theme::muted())),
            Cell::from(task.deadline.format(self.date_format).to_string()),
            Cell::from(Span::styled(
                task.priority.to_string(),
                theme::priority(task.priority),
            )),
            Cell::from(Span::styled(
                task.status.to_string(),
                theme::status(task.status),
            )),
        ]);

        if index == self.cursor {
            row.style(theme::selected())
        } else {
            row
        }
    }
}

impl Widget for TaskTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Tasks ")
            .borders(Borders::ALL)
            .border_style(theme::muted());

        let tasks = self.store.list();
        if tasks.is_empty() {
            let empty = ratatui::widgets::Paragraph::new(Span::styled(
                "No tasks yet. Press 'n' to add one.",
                theme::muted(),
            ))
            .block(block);
            empty.render(area, buf);
            return;
        }

        let rows: Vec<TableRow> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| self.task_row(index, task))
            .collect();

        let widths = [
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(18),
        ];

        let header = TableRow::new(vec!["Title", "Description", "Deadline", "Priority", "Status"])
            .style(theme::muted());

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::tempdir;
    use tugas_core::TaskDraft;

    fn render_to_string(store: &TaskStore, cursor: usize) -> String {
        let backend = TestBackend::new(90, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(TaskTable::new(store, cursor, "%Y-%m-%d"), frame.area())
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn task(title: &str, deadline: &str) -> tugas_core::Task {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            deadline: deadline.to_string(),
            priority: "Rendah".to_string(),
            status: "Belum".to_string(),
        }
        .build(0)
        .unwrap()
    }

    #[test]
    fn test_empty_store_shows_hint() {
        let temp = tempdir().unwrap();
        let store = TaskStore::load(temp.path());
        assert!(render_to_string(&store, 0).contains("No tasks yet"));
    }

    #[test]
    fn test_renders_tasks_with_columns() {
        let temp = tempdir().unwrap();
        let mut store = TaskStore::load(temp.path());
        store.create(task("Skripsi", "2025-06-01")).unwrap();

        let content = render_to_string(&store, 0);
        assert!(content.contains("Skripsi"));
        assert!(content.contains("2025-06-01"));
        assert!(content.contains("Rendah"));
        assert!(content.contains("Belum"));
    }
}
