//! Colors and semantic style builders shared by the widgets.

use ratatui::style::{Color, Modifier, Style};

// --- Palette ---
pub const BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::DarkGray;
pub const ACCENT: Color = Color::Cyan;
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;
pub const DONE: Color = Color::Green;

/// Style for the value under focus.
pub fn focused() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Style for selected rows in lists and tables.
pub fn selected() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::REVERSED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn error() -> Style {
    Style::default().fg(ERROR)
}

/// Style for the priority badge.
pub fn priority(priority: tugas_core::Priority) -> Style {
    use tugas_core::Priority::*;
    let color = match priority {
        Rendah => Color::Green,
        Sedang => Color::Yellow,
        Tinggi => Color::Red,
    };
    Style::default().fg(color)
}

/// Style for the status column.
pub fn status(status: tugas_core::Status) -> Style {
    use tugas_core::Status::*;
    let color = match status {
        Belum => TEXT_MUTED,
        SedangDikerjakan => Color::Yellow,
        Selesai => DONE,
    };
    Style::default().fg(color)
}
