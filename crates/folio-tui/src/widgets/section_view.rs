use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Section};
use crate::hover::{HoverMap, Zone};

use super::truncate_str;

/// The active section: scrambling title plus section content
pub struct SectionViewWidget;

impl SectionViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, hover: &mut HoverMap) {
        let theme = &app.theme;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 2 {
            return;
        }

        // Title row: the scramble effect's current display. The hover zone
        // only spans the text itself so entering/leaving it is deliberate.
        let title = app.scramble.display().to_string();
        let title_width = (title.chars().count() as u16).min(inner.width).max(1);
        let title_area = Rect::new(inner.x, inner.y, title_width, 1);
        hover.register(Zone::SectionTitle, title_area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                title,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ))),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );

        let content_area = Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            inner.height.saturating_sub(2),
        );

        match app.section {
            Section::About => Self::render_about(frame, content_area, app),
            Section::Projects => Self::render_projects(frame, content_area, app),
            Section::Publications => Self::render_publications(frame, content_area, app),
            Section::Education => Self::render_education(frame, content_area, app),
            Section::Contact => Self::render_contact(frame, content_area, app),
        }
    }

    fn render_about(frame: &mut Frame, area: Rect, app: &App) {
        let paragraph = Paragraph::new(app.profile.about.trim().to_string())
            .style(Style::default().fg(app.theme.fg1))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_projects(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let width = area.width as usize;
        let mut lines = Vec::new();

        for (i, project) in app.profile.projects.iter().enumerate() {
            let selected = i == app.selected_project;
            let marker = if selected { "▸ " } else { "  " };

            let mut title_spans = vec![Span::styled(
                format!("{}{}", marker, project.title),
                if selected {
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg0)
                },
            )];
            if let Some(year) = project.year {
                title_spans.push(Span::styled(
                    format!("  {}", year),
                    Style::default().fg(theme.muted),
                ));
            }
            if project.link.is_some() {
                title_spans.push(Span::styled("  ↗", Style::default().fg(theme.accent)));
            }
            let title_line = if selected {
                Line::from(title_spans).style(Style::default().bg(theme.bg1))
            } else {
                Line::from(title_spans)
            };
            lines.push(title_line);

            if !project.tech.is_empty() {
                lines.push(Line::from(Span::styled(
                    truncate_str(&format!("    {}", project.tech.join(" · ")), width),
                    Style::default().fg(theme.muted),
                )));
            }
            lines.push(Line::from(Span::styled(
                truncate_str(&format!("    {}", project.summary), width),
                Style::default().fg(theme.fg1),
            )));
            lines.push(Line::default());
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_publications(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let width = area.width as usize;
        let mut lines = Vec::new();

        for (i, publication) in app.profile.publications.iter().enumerate() {
            let selected = i == app.selected_publication;
            let marker = if selected { "▸ " } else { "  " };
            let year = publication
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "    ".to_string());

            let title_line = Line::from(vec![
                Span::styled(
                    format!("{}{}  ", marker, year),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    truncate_str(&publication.title, width.saturating_sub(10)),
                    if selected {
                        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.fg0)
                    },
                ),
            ]);
            lines.push(if selected {
                title_line.style(Style::default().bg(theme.bg1))
            } else {
                title_line
            });

            if let Some(venue) = &publication.venue {
                lines.push(Line::from(Span::styled(
                    truncate_str(&format!("        {}", venue), width),
                    Style::default().fg(theme.muted),
                )));
            }
            lines.push(Line::default());
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_education(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let width = area.width as usize;
        let mut lines = Vec::new();

        for entry in &app.profile.education {
            lines.push(Line::from(vec![
                Span::styled(
                    entry.institution.clone(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", entry.period),
                    Style::default().fg(theme.muted),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", entry.degree),
                Style::default().fg(theme.fg1),
            )));
            if let Some(note) = &entry.note {
                lines.push(Line::from(Span::styled(
                    truncate_str(&format!("  {}", note), width),
                    Style::default().fg(theme.muted),
                )));
            }
            lines.push(Line::default());
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_contact(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let profile = &app.profile;
        let mut lines = Vec::new();

        if !profile.contact.email.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("mail  ", Style::default().fg(theme.muted)),
                Span::styled(
                    profile.contact.email.clone(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        if let Some(hint) = &profile.contact.subject_hint {
            lines.push(Line::from(Span::styled(
                format!("      \"{}\"", hint),
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::default());

        for (i, link) in profile.links.iter().enumerate() {
            let selected = i == app.selected_link;
            let marker = if selected { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(
                    format!("{}{:<10}", marker, link.name),
                    if selected {
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.fg1)
                    },
                ),
                Span::styled(link.url.clone(), Style::default().fg(theme.muted)),
            ]);
            lines.push(if selected {
                line.style(Style::default().bg(theme.bg1))
            } else {
                line
            });
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
