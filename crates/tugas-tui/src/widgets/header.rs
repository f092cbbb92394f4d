//! Main header: app title and screen tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use tugas_app::Screen;

use crate::theme;

/// Title bar with the two screen tabs.
pub struct Header {
    screen: Screen,
}

impl Header {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    fn tab(&self, label: &str, active: bool) -> Span<'static> {
        if active {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            Span::styled(format!(" {label} "), theme::muted())
        }
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // The editor is reached from the task list, so its tab stays lit.
        let tasks_active = matches!(self.screen, Screen::TaskList | Screen::TaskEditor);

        let line = Line::from(vec![
            Span::styled(
                " tugas ",
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            self.tab("Todo", self.screen == Screen::TodoForm),
            self.tab("Tasks", tasks_active),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted());
        Paragraph::new(line).block(block).render(area, buf);
    }
}
