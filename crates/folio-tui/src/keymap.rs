use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use folio_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        // Helper to add binding with conflict detection
        let mut add_binding = |key_str: &str, action: Action| {
            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', using default", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.next_section, Action::NextSection);
        add_binding(&config.prev_section, Action::PrevSection);
        add_binding(&config.move_down, Action::MoveDown);
        add_binding(&config.move_up, Action::MoveUp);
        add_binding(&config.open_link, Action::OpenLink);
        add_binding(&config.replay, Action::Replay);
        add_binding(&config.help, Action::Help);

        // Hardcoded bindings that shouldn't be configurable
        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        // Arrow keys and Tab as always-available alternatives
        bindings.entry(KeyBinding::simple(KeyCode::Left)).or_insert(Action::PrevSection);
        bindings.entry(KeyBinding::simple(KeyCode::Right)).or_insert(Action::NextSection);
        bindings.entry(KeyBinding::simple(KeyCode::Up)).or_insert(Action::MoveUp);
        bindings.entry(KeyBinding::simple(KeyCode::Down)).or_insert(Action::MoveDown);
        bindings.entry(KeyBinding::simple(KeyCode::Tab)).or_insert(Action::NextSection);
        bindings.entry(KeyBinding::shift(KeyCode::BackTab)).or_insert(Action::PrevSection);
        bindings.entry(KeyBinding::simple(KeyCode::Enter)).or_insert(Action::OpenLink);
        // Escape for exiting overlays
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<Action> {
        self.bindings.get(binding).copied()
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "q", "/", etc.
/// - Uppercase (Shift): "G", "N", etc.
/// - Ctrl: "<C-j>", "<C-d>", etc.
/// - Shift: "<S-Tab>", "<S-g>", etc.
/// - Special keys: "<CR>", "<Enter>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<Right>", "<Up>", "<Down>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    // Handle special notation <...>
    if s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    // Single character
    if s.chars().count() == 1 {
        let c = s.chars().next()?;
        // Uppercase letters are Shift+letter
        if c.is_ascii_uppercase() {
            return Some(KeyBinding::shift(KeyCode::Char(c)));
        }
        return Some(KeyBinding::simple(KeyCode::Char(c)));
    }

    None
}

/// Parse the inner part of `<...>` notation
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    // Ctrl modifier: <C-x>
    if let Some(rest) = inner.strip_prefix("C-") {
        let base = parse_base_key(rest)?;
        return Some(KeyBinding::ctrl(base));
    }

    // Shift modifier: <S-x>, <S-Tab>
    if let Some(rest) = inner.strip_prefix("S-") {
        let base = parse_base_key(rest)?;
        // Shift+Tab arrives as BackTab
        if base == KeyCode::Tab {
            return Some(KeyBinding::shift(KeyCode::BackTab));
        }
        return Some(KeyBinding::shift(base));
    }

    parse_base_key(inner).map(KeyBinding::simple)
}

/// Parse a bare key name: a single character or a named special key
fn parse_base_key(s: &str) -> Option<KeyCode> {
    if s.chars().count() == 1 {
        return Some(KeyCode::Char(s.chars().next()?.to_ascii_lowercase()));
    }

    match s {
        "CR" | "Enter" => Some(KeyCode::Enter),
        "Esc" => Some(KeyCode::Esc),
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Char(' ')),
        "BS" | "Backspace" => Some(KeyCode::Backspace),
        "Left" => Some(KeyCode::Left),
        "Right" => Some(KeyCode::Right),
        "Up" => Some(KeyCode::Up),
        "Down" => Some(KeyCode::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_char() {
        assert_eq!(
            parse_key_binding("j"),
            Some(KeyBinding::simple(KeyCode::Char('j')))
        );
        assert_eq!(
            parse_key_binding("?"),
            Some(KeyBinding::simple(KeyCode::Char('?')))
        );
    }

    #[test]
    fn test_parse_uppercase_is_shift() {
        assert_eq!(
            parse_key_binding("G"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
    }

    #[test]
    fn test_parse_ctrl() {
        assert_eq!(
            parse_key_binding("<C-d>"),
            Some(KeyBinding::ctrl(KeyCode::Char('d')))
        );
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<CR>"),
            Some(KeyBinding::simple(KeyCode::Enter))
        );
        assert_eq!(
            parse_key_binding("<Esc>"),
            Some(KeyBinding::simple(KeyCode::Esc))
        );
        assert_eq!(
            parse_key_binding("<Tab>"),
            Some(KeyBinding::simple(KeyCode::Tab))
        );
        assert_eq!(
            parse_key_binding("<Space>"),
            Some(KeyBinding::simple(KeyCode::Char(' ')))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::BackTab))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_key_binding(""), None);
        assert_eq!(parse_key_binding("jk"), None);
        assert_eq!(parse_key_binding("<M-x>"), None);
        assert_eq!(parse_key_binding("<Bogus>"), None);
    }

    #[test]
    fn test_default_keymap_lookup() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::ctrl(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('r'))),
            Some(Action::Replay)
        );
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            // Same key as quit; the later binding loses.
            replay: "q".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
    }
}
