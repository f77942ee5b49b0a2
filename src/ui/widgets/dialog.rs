// ui/widgets/dialog.rs - Modal dialog widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap},
};

use crate::dialog::{ConfirmChoice, Dialog};
use crate::ui::theme::Theme;

const PROMPT_LABEL: &str = "File name: ";

/// Centered modal box for confirmations, path prompts and errors
pub struct DialogWidget<'a> {
    pub dialog: &'a Dialog,
    pub theme: &'a Theme,
}

impl<'a> DialogWidget<'a> {
    pub fn new(dialog: &'a Dialog, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }

    /// Centered box sized for the dialog's content
    pub fn area(dialog: &Dialog, screen: Rect) -> Rect {
        let (content_width, content_height) = match dialog {
            Dialog::Confirm { message, .. } => {
                let buttons: usize = ConfirmChoice::ALL
                    .iter()
                    .map(|choice| choice.label().len() + 6)
                    .sum();
                (message.chars().count().max(buttons), 3)
            }
            Dialog::Prompt { .. } => (56, 3),
            Dialog::Error { message, .. } => {
                let widest = message.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                (widest.max(20), message.lines().count() as u16 + 2)
            }
        };
        // Borders plus one column of padding on each side
        let width = (content_width as u16 + 4).min(screen.width);
        let height = (content_height + 2).min(screen.height);
        Rect {
            x: screen.x + (screen.width - width) / 2,
            y: screen.y + (screen.height - height) / 2,
            width,
            height,
        }
    }

    /// Terminal cursor position while a prompt is open: end of the typed path
    pub fn prompt_cursor(dialog: &Dialog, screen: Rect) -> Option<(u16, u16)> {
        let Dialog::Prompt { input, .. } = dialog else {
            return None;
        };
        let area = Self::area(dialog, screen);
        let inner_width = area.width.saturating_sub(4);
        let typed = (PROMPT_LABEL.len() + input.chars().count()) as u16;
        let x = area.x + 2 + typed.min(inner_width.saturating_sub(1));
        Some((x, area.y + 1))
    }

    fn button(&self, choice: ConfirmChoice, selected: bool) -> Vec<Span<'static>> {
        let base = Style::default()
            .bg(self.theme.ui.status_bar_bg)
            .fg(self.theme.general.foreground);
        let style = if selected {
            base.bg(self.theme.ui.accent)
                .fg(self.theme.general.background)
                .add_modifier(Modifier::BOLD)
        } else {
            base
        };
        let label = choice.label();
        let (first, rest) = label.split_at(1);
        vec![
            Span::styled("[ ", style),
            Span::styled(first.to_string(), style.add_modifier(Modifier::UNDERLINED)),
            Span::styled(format!("{} ]", rest), style),
            Span::styled("  ", base),
        ]
    }
}

impl Widget for DialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let base = Style::default()
            .bg(self.theme.ui.status_bar_bg)
            .fg(self.theme.general.foreground);
        let title_color = match self.dialog {
            Dialog::Error { .. } => ratatui::style::Color::Red,
            _ => self.theme.ui.accent,
        };

        let (lines, alignment) = match self.dialog {
            Dialog::Confirm {
                message, selected, ..
            } => {
                let buttons: Vec<Span> = ConfirmChoice::ALL
                    .iter()
                    .flat_map(|&choice| self.button(choice, choice == *selected))
                    .collect();
                (
                    vec![
                        Line::from(message.clone()),
                        Line::from(""),
                        Line::from(buttons),
                    ],
                    Alignment::Center,
                )
            }
            Dialog::Prompt { input, .. } => {
                let inner_width = area.width.saturating_sub(4) as usize;
                // Keep the tail of long paths visible
                let room = inner_width.saturating_sub(PROMPT_LABEL.len() + 1);
                let skip = input.chars().count().saturating_sub(room);
                let shown: String = input.chars().skip(skip).collect();
                (
                    vec![
                        Line::from(vec![
                            Span::styled(PROMPT_LABEL, base.add_modifier(Modifier::BOLD)),
                            Span::styled(shown, base.fg(self.theme.ui.status_bar_fg)),
                        ]),
                        Line::from(""),
                        Line::from(Span::styled(
                            "Enter to confirm, Esc to cancel",
                            base.fg(self.theme.ui.gutter_fg),
                        )),
                    ],
                    Alignment::Left,
                )
            }
            Dialog::Error { message, .. } => {
                let mut lines: Vec<Line> = message.lines().map(|l| Line::from(l.to_string())).collect();
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "[ OK ]",
                    base.bg(self.theme.ui.accent)
                        .fg(self.theme.general.background)
                        .add_modifier(Modifier::BOLD),
                )));
                (lines, Alignment::Center)
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(title_color))
            .title(format!(" {} ", self.dialog.title()))
            .title_style(base.fg(title_color).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1))
            .style(base);

        Paragraph::new(lines)
            .block(block)
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
