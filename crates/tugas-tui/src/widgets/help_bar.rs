//! Bottom key-hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tugas_app::Screen;

use crate::theme;

/// One-line bar listing the keys that matter on the current screen.
pub struct HelpBar {
    screen: Screen,
    confirming_delete: bool,
}

impl HelpBar {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            confirming_delete: false,
        }
    }

    pub fn confirming_delete(mut self, confirming: bool) -> Self {
        self.confirming_delete = confirming;
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.confirming_delete {
            return &[("y", "delete"), ("n", "keep")];
        }
        match self.screen {
            Screen::TodoForm => &[
                ("Enter", "add row"),
                ("^D", "remove row"),
                ("Tab", "field"),
                ("↑↓", "row"),
                ("^L", "tasks"),
                ("Esc", "quit"),
            ],
            Screen::TaskList => &[
                ("n", "new"),
                ("e", "edit"),
                ("d", "delete"),
                ("↑↓", "select"),
                ("Tab", "todo"),
                ("q", "quit"),
            ],
            Screen::TaskEditor => &[
                ("Enter", "save"),
                ("Tab", "field"),
                ("←→", "option"),
                ("Esc", "cancel"),
            ],
        }
    }
}

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", theme::muted()));
            }
            spans.push(Span::styled(*key, theme::text()));
            spans.push(Span::styled(format!(" {action}"), theme::muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
