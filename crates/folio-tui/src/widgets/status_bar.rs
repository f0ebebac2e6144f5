use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(" {} | {}", mode_str, app.section.label())
        };

        let keymap = &app.config.keymap;
        let help_hint = format!(
            " {}:quit {}/{}:sections {}/{}:move {}:open {}:replay {}:help ",
            keymap.quit,
            keymap.prev_section,
            keymap.next_section,
            keymap.move_up,
            keymap.move_down,
            keymap.open_link,
            keymap.replay,
            keymap.help,
        );

        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.chars().count() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.muted).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
