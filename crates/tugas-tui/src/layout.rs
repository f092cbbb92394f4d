//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + screen tabs)
    pub header: Rect,

    /// Main content area (todo form, task table, or task editor)
    pub body: Rect,

    /// Key-hint bar; zero-height when hidden
    pub help: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_help_bar` - Whether to reserve a row for key hints
pub fn create(area: Rect, show_help_bar: bool) -> ScreenAreas {
    let help_height = if show_help_bar { 1 } else { 0 };

    let constraints = vec![
        Constraint::Length(3), // Header (top border + title row + bottom border)
        Constraint::Min(3),    // Body
        Constraint::Length(help_height),
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        help: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_help_bar() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.help.height, 1);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.body.y, 3);
    }

    #[test]
    fn test_layout_without_help_bar() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.help.height, 0);
        assert_eq!(layout.body.height, 21);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        for show in [true, false] {
            let layout = create(area, show);
            assert_eq!(
                layout.header.height + layout.body.height + layout.help.height,
                area.height
            );
        }
    }
}
