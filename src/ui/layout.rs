// ui/layout.rs - Screen regions: menu bar, gutter, text area, status bar

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub screen: Rect,
    pub menu_bar: Rect,
    pub gutter: Rect,
    pub text: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(screen: Rect, gutter_width: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Menu bar with window title
                Constraint::Min(1),    // Gutter + text
                Constraint::Length(1), // Status bar
            ])
            .split(screen);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(gutter_width), Constraint::Min(1)])
            .split(vertical[1]);

        Self {
            screen,
            menu_bar: vertical[0],
            gutter: body[0],
            text: body[1],
            status: vertical[2],
        }
    }

    /// Cell position relative to the text area, clamped into it. `None` when the
    /// point is above or below the body.
    pub fn text_cell(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        let body_top = self.text.y;
        let body_bottom = self.text.y + self.text.height;
        if row < body_top || row >= body_bottom || self.text.width == 0 {
            return None;
        }
        let col = column.saturating_sub(self.text.x).min(self.text.width - 1);
        Some((row - body_top, col))
    }

    pub fn in_menu_bar(&self, column: u16, row: u16) -> bool {
        let bar = self.menu_bar;
        row >= bar.y && row < bar.y + bar.height && column >= bar.x && column < bar.x + bar.width
    }
}
