use std::time::Instant;

use folio_core::fx::Phase;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::hover::{HoverMap, Zone};
use crate::theme::lerp_color;

/// The banner: name, cycling headline, tagline.
///
/// Hovering anywhere over it replays the headline sequence, so the whole
/// area registers as one pointer zone.
pub struct BannerWidget;

impl BannerWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, hover: &mut HoverMap, now: Instant) {
        hover.register(Zone::Banner, area);

        let theme = &app.theme;
        let identity = &app.profile.identity;

        let mut name_spans = vec![Span::styled(
            identity.name.clone(),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        )];
        if let Some(location) = &identity.location {
            name_spans.push(Span::styled(
                format!("  ·  {}", location),
                Style::default().fg(theme.muted),
            ));
        }

        let headline = Line::from(vec![
            Span::styled(identity.headline_prefix.clone(), Style::default().fg(theme.fg1)),
            Span::raw(" "),
            Self::cycler_span(app, now),
            Span::styled(identity.headline_suffix.clone(), Style::default().fg(theme.fg1)),
        ]);

        let lines = vec![
            Line::from(name_spans),
            Line::default(),
            headline,
            Line::from(Span::styled(
                identity.tagline.clone(),
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// The cycling word, faded through its enter/hold/exit window.
    ///
    /// The word enters during the first slice of its display window and
    /// exits during the last one; the final word enters over a longer slice
    /// and then holds at full strength. Padding to the longest word keeps
    /// the suffix from shifting as words change.
    fn cycler_span(app: &App, now: Instant) -> Span<'static> {
        let theme = &app.theme;
        let cycler = &app.cycler;

        let word = cycler.current().unwrap_or_default();
        let pad = app
            .profile
            .identity
            .headline_words
            .iter()
            .map(|w| w.width())
            .max()
            .unwrap_or(0);
        let padded = format!("{:^pad$}", word);

        let alpha = if cycler.phase() == Phase::Idle {
            1.0
        } else {
            let progress = cycler.transition_progress(now);
            let easing = app.config.fx.cycler.easing;
            let enter_end = if cycler.is_final_word() { 0.25 } else { 0.15 };
            let exit_start = 0.85;

            if progress < enter_end {
                easing.apply(progress / enter_end)
            } else if !cycler.is_final_word() && progress > exit_start {
                1.0 - easing.apply((progress - exit_start) / (1.0 - exit_start))
            } else {
                1.0
            }
        };

        let color = lerp_color(theme.bg0, theme.accent, alpha);
        Span::styled(
            padded,
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    }
}
