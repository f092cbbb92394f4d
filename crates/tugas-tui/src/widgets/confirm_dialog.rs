//! Centered delete-confirmation popup

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme;

/// Modal asking whether to delete a task.
pub struct ConfirmDialog<'a> {
    task_title: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(task_title: &'a str) -> Self {
        Self { task_title }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 44.min(area.width.saturating_sub(4));
        let height = 5;
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(x, y, width, height);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(" Delete task? ")
            .borders(Borders::ALL)
            .border_style(theme::error())
            .style(Style::default().bg(theme::POPUP_BG));
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let lines = vec![
            Line::from(Span::styled(self.task_title.to_string(), theme::text())),
            Line::from(vec![
                Span::styled("y", theme::text()),
                Span::styled(" delete   ", theme::muted()),
                Span::styled("n", theme::text()),
                Span::styled(" keep", theme::muted()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
