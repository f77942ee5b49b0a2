// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::buffer::char_cells;
use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Editor pane widget that renders the text editor content
pub struct EditorPane<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    // Selected char columns on `line_idx`, as a half-open range in document columns.
    fn selected_cols(&self, line_idx: usize, line_len: usize) -> Option<(usize, usize)> {
        let (start, end) = self.editor.selection()?;
        if line_idx < start.line || line_idx > end.line {
            return None;
        }
        let from = if line_idx == start.line { start.col } else { 0 };
        // Include the line break of fully covered lines so empty lines show as selected
        let to = if line_idx == end.line {
            end.col
        } else {
            line_len + 1
        };
        Some((from, to))
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_style = Style::default()
            .bg(self.theme.general.background)
            .fg(self.theme.general.foreground);
        let selected_style = text_style.bg(self.theme.general.selection_bg);
        buf.set_style(area, text_style);

        let viewport = &self.editor.viewport;
        let document = &self.editor.document;
        let rows = viewport
            .visible_lines(document.line_count())
            .take(area.height as usize);
        for (i, line_idx) in rows.enumerate() {
            let Some(line) = document.line(line_idx) else {
                break;
            };
            let line_len = line.chars().count();
            let selected = self.selected_cols(line_idx, line_len);
            let is_selected =
                |col: usize| selected.is_some_and(|(from, to)| (from..to).contains(&col));

            // Walk the line in screen cells; the extra blank cell shows a selected line break
            let mut spans: Vec<Span> = Vec::new();
            let mut run = String::new();
            let mut run_selected = false;
            let mut cell = 0;
            let first = viewport.offset_col;
            let last = first + area.width as usize;
            for (col, ch) in line.chars().chain(std::iter::once(' ')).enumerate() {
                let width = char_cells(ch);
                let (start, end) = (cell, cell + width);
                cell = end;
                if end <= first {
                    continue;
                }
                if end > last {
                    break;
                }
                let sel = is_selected(col);
                if sel != run_selected && !run.is_empty() {
                    let style = if run_selected { selected_style } else { text_style };
                    spans.push(Span::styled(std::mem::take(&mut run), style));
                }
                run_selected = sel;
                if start < first {
                    // Wide glyph cut by the left edge
                    run.push_str(&" ".repeat(end - first));
                } else if ch.is_control() {
                    // Tabs take one cell so columns stay aligned with the cursor
                    run.push(' ');
                } else {
                    run.push(ch);
                }
            }
            if !run.is_empty() {
                let style = if run_selected { selected_style } else { text_style };
                spans.push(Span::styled(run, style));
            }

            buf.set_line(area.x, area.y + i as u16, &Line::from(spans), area.width);
        }
    }
}
