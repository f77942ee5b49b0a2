// src/ui/widgets/menu.rs - Menu bar and drop-down menu widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::menu::{MenuEntry, MenuId, MenuState};
use crate::ui::theme::Theme;

/// Top row: menu titles on the left, window title on the right
pub struct MenuBar<'a> {
    pub open: Option<MenuId>,
    pub title: &'a str,
    pub theme: &'a Theme,
}

impl<'a> MenuBar<'a> {
    pub fn new(open: Option<MenuId>, title: &'a str, theme: &'a Theme) -> Self {
        Self { open, title, theme }
    }
}

impl Widget for MenuBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .bg(self.theme.ui.status_bar_bg)
            .fg(self.theme.ui.status_bar_fg);
        buf.set_style(area, base);

        let mut spans = Vec::new();
        for id in MenuId::ALL {
            let style = if self.open == Some(id) {
                base.bg(self.theme.ui.accent)
                    .fg(self.theme.general.background)
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            spans.push(Span::styled(format!(" {} ", id.title()), style));
        }
        let menus_width: u16 = MenuId::ALL
            .iter()
            .map(|id| id.title().len() as u16 + 2)
            .sum();
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        // Window title, right-aligned when there is room for it
        let title_len = self.title.chars().count() as u16 + 1;
        if area.width > menus_width + title_len {
            let x = area.x + area.width - title_len;
            buf.set_string(x, area.y, self.title, base.add_modifier(Modifier::BOLD));
        }
    }
}

/// Open drop-down listing the entries of one menu
pub struct MenuDropdown<'a> {
    pub state: MenuState,
    pub theme: &'a Theme,
}

impl<'a> MenuDropdown<'a> {
    pub fn new(state: MenuState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn content_width(id: MenuId) -> u16 {
        id.entries()
            .iter()
            .map(|entry| match entry {
                MenuEntry::Item {
                    label, accelerator, ..
                } => label.len() + accelerator.len() + 4,
                MenuEntry::Separator => 0,
            })
            .max()
            .unwrap_or(10) as u16
    }

    /// Where the drop-down for `id` is drawn: under its title on the menu bar
    pub fn area(id: MenuId, screen: Rect) -> Rect {
        let width = (Self::content_width(id) + 2).min(screen.width);
        let height = (id.entries().len() as u16 + 2).min(screen.height.saturating_sub(1));
        let mut x = screen.x + id.bar_offset();
        if x + width > screen.x + screen.width {
            x = (screen.x + screen.width).saturating_sub(width);
        }
        Rect {
            x,
            y: screen.y + 1,
            width,
            height,
        }
    }

    /// Entry index under a screen cell of the drop-down, if any
    pub fn entry_at(id: MenuId, screen: Rect, column: u16, row: u16) -> Option<usize> {
        let area = Self::area(id, screen);
        let inside = column > area.x
            && column < area.x + area.width.saturating_sub(1)
            && row > area.y
            && row < area.y + area.height.saturating_sub(1);
        inside.then(|| (row - area.y - 1) as usize)
    }

    pub fn contains(id: MenuId, screen: Rect, column: u16, row: u16) -> bool {
        let area = Self::area(id, screen);
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}

impl Widget for MenuDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first
        Clear.render(area, buf);

        let base = Style::default()
            .bg(self.theme.ui.status_bar_bg)
            .fg(self.theme.general.foreground);
        let inner_width = area.width.saturating_sub(2) as usize;

        let lines: Vec<Line> = self
            .state
            .open
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                MenuEntry::Item {
                    label, accelerator, ..
                } => {
                    let style = if i == self.state.selected {
                        base.bg(self.theme.ui.accent)
                            .fg(self.theme.general.background)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        base
                    };
                    let gap = inner_width.saturating_sub(label.len() + accelerator.len() + 2);
                    let text = format!(" {}{}{} ", label, " ".repeat(gap), accelerator);
                    Line::from(Span::styled(text, style))
                }
                MenuEntry::Separator => Line::from(Span::styled(
                    "─".repeat(inner_width),
                    base.fg(self.theme.ui.gutter_fg),
                )),
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(self.theme.ui.gutter_fg))
            .style(base);

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
