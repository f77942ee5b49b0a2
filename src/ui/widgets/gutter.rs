// ui/widgets/gutter.rs - Gutter widget for line numbers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Gutter widget that shows the line labels of the editor's `GutterView`
pub struct Gutter<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> Gutter<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }
}

impl Widget for Gutter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .bg(self.theme.ui.gutter_bg)
            .fg(self.theme.ui.gutter_fg);
        buf.set_style(area, base);

        let gutter = &self.editor.gutter;
        let label_width = area.width.saturating_sub(1) as usize;
        for (i, label) in gutter.visible(area.height as usize).enumerate() {
            let line_idx = gutter.offset_line() + i;
            let style = if line_idx == self.editor.cursor.line {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            let text = format!("{:>width$} ", label, width = label_width);
            let line_widget = Line::from(Span::styled(text, style));
            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }
    }
}
