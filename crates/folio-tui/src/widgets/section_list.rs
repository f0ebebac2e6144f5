use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Section};
use crate::hover::{HoverMap, Zone};

/// Navigation list of the card's sections
pub struct SectionListWidget;

impl SectionListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, hover: &mut HoverMap) {
        let theme = &app.theme;

        let block = Block::default()
            .title(" folio ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (i, section) in Section::ALL.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
            hover.register(Zone::Nav(i), row);

            let active = *section == app.section;
            let marker = if active { "▸ " } else { "  " };
            let label = format!("{}{}", marker, section.label());

            let mut spans = vec![Span::styled(
                label,
                if active {
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg1)
                },
            )];
            if let Some(count) = Self::count(app, *section) {
                spans.push(Span::styled(
                    format!(" ({})", count),
                    Style::default().fg(theme.muted),
                ));
            }

            let paragraph = if active {
                Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg1))
            } else {
                Paragraph::new(Line::from(spans))
            };
            frame.render_widget(paragraph, row);
        }
    }

    fn count(app: &App, section: Section) -> Option<usize> {
        match section {
            Section::Projects => Some(app.profile.projects.len()),
            Section::Publications => Some(app.profile.publications.len()),
            Section::Education => Some(app.profile.education.len()),
            Section::Contact => Some(app.profile.links.len()),
            Section::About => None,
        }
    }
}
