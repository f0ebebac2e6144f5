use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the help overlay
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let keymap = &app.config.keymap;
        let entries = [
            (keymap.quit.as_str(), "quit"),
            (keymap.prev_section.as_str(), "previous section"),
            (keymap.next_section.as_str(), "next section"),
            (keymap.move_up.as_str(), "move selection up"),
            (keymap.move_down.as_str(), "move selection down"),
            (keymap.open_link.as_str(), "open selected link in browser"),
            (keymap.replay.as_str(), "replay the headline animation"),
            (keymap.help.as_str(), "toggle this help"),
            ("hover", "mouse over the headline or a section title"),
        ];

        let popup_width = 52u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines = vec![Line::default()];
        for (key, description) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:>7}  ", key),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(description, Style::default().fg(theme.fg1)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
