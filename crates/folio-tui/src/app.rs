use std::time::Instant;

use folio_core::{AppConfig, Phase, Profile, ScrambleReveal, WordCycler};

use crate::theme::Theme;

/// Sections of the portfolio card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Publications,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Publications,
        Section::Education,
        Section::Contact,
    ];

    /// Label shown in the navigation list
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Publications => "Research",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Display title the scramble effect resolves to
    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "ABOUT ME",
            Section::Projects => "SELECTED WORKS",
            Section::Publications => "RESEARCH",
            Section::Education => "EDUCATION",
            Section::Contact => "GET IN TOUCH",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// The loaded portfolio profile
    pub profile: Profile,
    /// Active theme
    pub theme: Theme,
    /// Currently focused section
    pub section: Section,
    /// Selected row per list section
    pub selected_project: usize,
    pub selected_publication: usize,
    pub selected_link: usize,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Banner headline word cycler
    pub cycler: WordCycler,
    /// Scramble effect on the active section title
    pub scramble: ScrambleReveal,
}

impl App {
    pub fn new(config: AppConfig, profile: Profile, theme: Theme, now: Instant) -> Self {
        let mut cycler = WordCycler::new(
            profile.identity.headline_words.clone(),
            config.fx.cycler.clone(),
        );
        // The headline plays once on startup, like a page-load animation.
        cycler.start(now);

        let mut scramble =
            ScrambleReveal::new(Section::About.title(), config.fx.scramble.clone());
        if config.fx.scramble.auto_start {
            scramble.start(now);
        }

        Self {
            config,
            profile,
            theme,
            section: Section::About,
            selected_project: 0,
            selected_publication: 0,
            selected_link: 0,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            cycler,
            scramble,
        }
    }

    /// Advance both effects. Call once per loop iteration.
    pub fn on_tick(&mut self, now: Instant) {
        self.cycler.tick(now);
        self.scramble.tick(now);
    }

    /// Whether the event loop should poll at animation cadence
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cycler.is_animating(now) || self.scramble.is_animating()
    }

    // --- Effect triggers -------------------------------------------------
    //
    // Named capability calls; the pointer (hover) and keyboard adapters
    // both land here rather than reaching into the engines.

    /// Replay the banner headline sequence from the first word
    pub fn replay_banner(&mut self, now: Instant) {
        self.cycler.start(now);
    }

    /// Pointer entered the section title: run the scramble reveal
    pub fn section_title_enter(&mut self, now: Instant) {
        self.scramble.start(now);
    }

    /// Pointer left the section title: snap back to the resolved text
    pub fn section_title_leave(&mut self) {
        // A run that already completed can keep its resolved display.
        if self.scramble.phase() != Phase::Done {
            self.scramble.stop();
        }
    }

    // --- Navigation ------------------------------------------------------

    /// Switch to a section. The title effect's target is fixed for its
    /// lifetime, so a section change swaps in a fresh engine and runs it.
    pub fn goto_section(&mut self, section: Section, now: Instant) {
        if section == self.section {
            return;
        }
        self.section = section;
        self.scramble = ScrambleReveal::new(section.title(), self.config.fx.scramble.clone());
        self.scramble.start(now);
        self.clear_status();
    }

    pub fn next_section(&mut self, now: Instant) {
        self.goto_section(self.section.next(), now);
    }

    pub fn prev_section(&mut self, now: Instant) {
        self.goto_section(self.section.prev(), now);
    }

    /// Move selection down in the current section
    pub fn move_down(&mut self) {
        match self.section {
            Section::Projects => {
                Self::step_down(&mut self.selected_project, self.profile.projects.len());
            }
            Section::Publications => {
                Self::step_down(
                    &mut self.selected_publication,
                    self.profile.publications.len(),
                );
            }
            Section::Contact => {
                Self::step_down(&mut self.selected_link, self.profile.links.len());
            }
            _ => {}
        }
    }

    /// Move selection up in the current section
    pub fn move_up(&mut self) {
        match self.section {
            Section::Projects => {
                self.selected_project = self.selected_project.saturating_sub(1);
            }
            Section::Publications => {
                self.selected_publication = self.selected_publication.saturating_sub(1);
            }
            Section::Contact => {
                self.selected_link = self.selected_link.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn step_down(selected: &mut usize, len: usize) {
        if len > 0 && *selected < len - 1 {
            *selected += 1;
        }
    }

    /// The link behind the current selection, if the section has one
    pub fn selected_link(&self) -> Option<&str> {
        match self.section {
            Section::Projects => self
                .profile
                .projects
                .get(self.selected_project)
                .and_then(|p| p.link.as_deref()),
            Section::Publications => self
                .profile
                .publications
                .get(self.selected_publication)
                .and_then(|p| p.link.as_deref()),
            Section::Contact => self
                .profile
                .links
                .get(self.selected_link)
                .map(|l| l.url.as_str()),
            _ => None,
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        App::new(
            AppConfig::default(),
            Profile::sample().unwrap(),
            Theme::default(),
            Instant::now(),
        )
    }

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Contact.next(), Section::About);
        assert_eq!(Section::About.prev(), Section::Contact);
    }

    #[test]
    fn test_goto_section_swaps_scramble_target() {
        let mut app = app();
        let now = Instant::now();
        app.goto_section(Section::Projects, now);
        assert_eq!(app.scramble.target(), "SELECTED WORKS");
        assert!(app.scramble.is_animating());
    }

    #[test]
    fn test_goto_same_section_is_noop() {
        let mut app = app();
        let now = Instant::now();
        app.goto_section(Section::Projects, now);
        let before = app.scramble.phase();
        // Re-selecting the active section must not restart the effect.
        app.goto_section(Section::Projects, now + Duration::from_millis(5));
        assert_eq!(app.scramble.phase(), before);
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let mut app = app();
        let now = Instant::now();
        app.goto_section(Section::Projects, now);
        let len = app.profile.projects.len();
        for _ in 0..len + 10 {
            app.move_down();
        }
        assert_eq!(app.selected_project, len - 1);
        for _ in 0..len + 10 {
            app.move_up();
        }
        assert_eq!(app.selected_project, 0);
    }

    #[test]
    fn test_selected_link_follows_section() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.selected_link(), None); // About has no links

        app.goto_section(Section::Projects, now);
        assert_eq!(
            app.selected_link(),
            app.profile.projects[0].link.as_deref()
        );

        app.goto_section(Section::Contact, now + Duration::from_millis(1));
        assert_eq!(app.selected_link(), Some(app.profile.links[0].url.as_str()));
    }

    #[test]
    fn test_banner_cycler_runs_on_startup() {
        let now = Instant::now();
        let app = App::new(
            AppConfig::default(),
            Profile::sample().unwrap(),
            Theme::default(),
            now,
        );
        assert!(app.cycler.is_animating(now));
        assert_eq!(
            app.cycler.current(),
            app.profile.identity.headline_words.first().map(String::as_str)
        );
    }
}
