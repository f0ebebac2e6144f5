use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use folio_core::{AppConfig, Profile};
use folio_tui::{
    app::{App, Mode, Section},
    event::{AppEvent, EventHandler},
    hover::{HoverMap, Zone},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::{BannerWidget, HelpWidget, SectionListWidget, SectionViewWidget, StatusBarWidget},
};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run(config: AppConfig) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Load the profile, falling back to the embedded sample
    let profile = Profile::load_or_sample(&config.profile_path())?;
    for problem in profile.problems() {
        tracing::warn!("profile: {}", problem);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let mouse_enabled = config.ui.mouse;
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("folio"))?;
    } else {
        execute!(stdout, EnterAlternateScreen, SetTitle("folio"))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    let event_handler = EventHandler::from_config(&config.ui);
    let mut app = App::new(config, profile, theme, Instant::now());
    let mut hover = HoverMap::new();

    let result = event_loop(&mut terminal, &mut app, &mut hover, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    hover: &mut HoverMap,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|frame| draw(frame, app, hover, now))?;

        match event_handler.next(app.is_animating(now))? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app, keymap);
                apply_action(app, action);
            }
            Some(AppEvent::Mouse(mouse)) => handle_mouse(app, hover, mouse),
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) | None => {}
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &App, hover: &mut HoverMap, now: Instant) {
    hover.begin_frame();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Banner
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    BannerWidget::render(frame, chunks[0], app, hover, now);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(chunks[1]);

    SectionListWidget::render(frame, body[0], app, hover);
    SectionViewWidget::render(frame, body[1], app, hover);
    StatusBarWidget::render(frame, chunks[2], app);

    if app.mode == Mode::Help {
        HelpWidget::render(frame, app);
    }
}

fn apply_action(app: &mut App, action: Action) {
    let now = Instant::now();
    match action {
        Action::Quit => app.should_quit = true,
        Action::NextSection => app.next_section(now),
        Action::PrevSection => app.prev_section(now),
        Action::MoveDown => app.move_down(),
        Action::MoveUp => app.move_up(),
        Action::OpenLink => open_selected_link(app),
        Action::Replay => app.replay_banner(now),
        Action::Help => app.mode = Mode::Help,
        Action::ExitMode => app.mode = Mode::Normal,
        Action::None => {}
    }
}

/// Route pointer movement into the effect triggers and clicks into
/// section navigation.
fn handle_mouse(app: &mut App, hover: &mut HoverMap, mouse: MouseEvent) {
    let now = Instant::now();
    match mouse.kind {
        MouseEventKind::Moved => {
            let change = hover.update(mouse.column, mouse.row);
            match change.entered {
                Some(Zone::Banner) => app.replay_banner(now),
                Some(Zone::SectionTitle) => app.section_title_enter(now),
                _ => {}
            }
            if change.left == Some(Zone::SectionTitle) {
                app.section_title_leave();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(Zone::Nav(i)) = hover.locate(mouse.column, mouse.row) {
                if let Some(section) = Section::ALL.get(i).copied() {
                    app.goto_section(section, now);
                }
            }
        }
        _ => {}
    }
}

fn open_selected_link(app: &mut App) {
    match app.selected_link() {
        Some(url) => {
            let url = url.to_string();
            match open::that(&url) {
                Ok(()) => app.set_status(format!("Opened {}", url)),
                Err(e) => {
                    tracing::error!("failed to open {}: {}", url, e);
                    app.set_status(format!("Failed to open {}", url));
                }
            }
        }
        None => app.set_status("Nothing to open in this section"),
    }
}
