use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSection,
    PrevSection,
    MoveDown,
    MoveUp,
    OpenLink,
    Replay,
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Help overlay: any key dismisses it
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return action;
    }

    // Shifted characters (e.g. '?') arrive with the SHIFT modifier set;
    // retry without it so plain-character bindings still match.
    if key.modifiers == KeyModifiers::SHIFT {
        if let KeyCode::Char(c) = key.code {
            if let Some(action) = keymap.get(&KeyBinding::simple(KeyCode::Char(c))) {
                return action;
            }
        }
    }

    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{AppConfig, Profile};
    use std::time::Instant;

    fn app() -> App {
        App::new(
            AppConfig::default(),
            Profile::sample().unwrap(),
            crate::theme::Theme::default(),
            Instant::now(),
        )
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_normal_mode_dispatch() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), &app, &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::MoveDown
        );
    }

    #[test]
    fn test_shifted_char_falls_back_to_plain_binding() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('?'), KeyModifiers::SHIFT), &app, &keymap),
            Action::Help
        );
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let mut app = app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::ExitMode
        );
    }
}
