// ui/widgets/status_bar.rs - Bottom status row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Cursor position from the `StatusView` on the left, document size and encoding on the right
pub struct StatusBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    fn summary(&self) -> String {
        let lines = self.editor.document.line_count();
        let noun = if lines == 1 { "line" } else { "lines" };
        format!("{} {}  UTF-8 ", lines, noun)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .bg(self.theme.ui.status_bar_bg)
            .fg(self.theme.ui.status_bar_fg);
        buf.set_style(area, base);

        // The transient message after the position stands out
        let text = &self.editor.status.text;
        let spans = match self.editor.status_message.as_deref() {
            Some(msg) if text.ends_with(msg) => {
                let (position, message) = text.split_at(text.len() - msg.len());
                vec![
                    Span::styled(format!(" {}", position), base),
                    Span::styled(message.to_string(), base.add_modifier(Modifier::BOLD)),
                ]
            }
            _ => vec![Span::styled(format!(" {}", text), base)],
        };
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let summary = self.summary();
        let used = text.chars().count() as u16 + 2;
        let width = summary.chars().count() as u16;
        if area.width >= used + width {
            buf.set_string(
                area.x + area.width - width,
                area.y,
                summary,
                base.fg(self.theme.ui.gutter_fg),
            );
        }
    }
}
