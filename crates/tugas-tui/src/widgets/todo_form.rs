//! The repeating-row todo form widget.
//!
//! Renders each row of the collection as one line: checkbox, text field, and
//! priority selector. The focused field of the focused row is highlighted;
//! the text field shows a trailing cursor when focused.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use tugas_app::{TodoField, TodoFocus, TodoForm};
use tugas_core::Row;

use crate::theme;

pub struct TodoFormView<'a> {
    form: &'a TodoForm,
    focus: TodoFocus,
}

impl<'a> TodoFormView<'a> {
    pub fn new(form: &'a TodoForm, focus: TodoFocus) -> Self {
        Self { form, focus }
    }

    fn row_line(&self, index: usize, row: &Row) -> Line<'static> {
        let is_focused_row = index == self.focus.row;
        let field_style = |field: TodoField| {
            if is_focused_row && self.focus.field == field {
                theme::focused()
            } else {
                theme::text()
            }
        };

        let checkbox = if row.checked { "[x]" } else { "[ ]" };
        let mut text = row.text.clone();
        if is_focused_row && self.focus.field == TodoField::Text {
            text.push('_');
        }
        if text.is_empty() {
            text = "(empty)".to_string();
        }

        let mut spans = vec![
            Span::styled(format!("{:>3} ", row.id), theme::muted()),
            Span::styled(checkbox, field_style(TodoField::Checked)),
            Span::raw(" "),
            Span::styled(text, field_style(TodoField::Text)),
            Span::raw(" "),
            Span::styled("‹", theme::muted()),
            Span::styled(
                row.priority.to_string(),
                if is_focused_row && self.focus.field == TodoField::Priority {
                    theme::focused()
                } else {
                    theme::priority(row.priority)
                },
            ),
            Span::styled("›", theme::muted()),
        ];

        if is_focused_row {
            spans.push(Span::styled(
                format!("  {}", row.labels().checkbox_name),
                theme::muted(),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for TodoFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .form
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| self.row_line(index, row))
            .collect();

        let block = Block::default()
            .title(" Todo ")
            .borders(Borders::ALL)
            .border_style(theme::muted());

        // Keep the focused row visible when the list outgrows the area.
        let inner_height = area.height.saturating_sub(2) as usize;
        let scroll = self.focus.row.saturating_sub(inner_height.saturating_sub(1)) as u16;

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}
