use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub fx: FxConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            fx: FxConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Path to the profile file; defaults to profile.toml next to the config
    #[serde(default)]
    pub profile: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            profile: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while an effect is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// React to mouse movement (hover triggers) and clicks
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            mouse: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

impl UiConfig {
    /// Poll timeout while idle
    #[inline]
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Poll timeout while an effect is animating
    #[inline]
    pub fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "catppuccin-mocha")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            // Accept a simple string as just the theme name
            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            // Accept a map/struct with 'name' and optional 'colors'
            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            // Ignore unknown fields
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (panels)
    pub bg1: Option<String>,
    /// Tertiary background (selection, status bar)
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (slightly dimmer)
    pub fg1: Option<String>,
    /// Muted foreground (hints, metadata)
    pub muted: Option<String>,
    /// Accent color (effect highlights, active titles)
    pub accent: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Success color
    pub success: Option<String>,
}

/// Easing curve applied to effect transition progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump at the end, no interpolation
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FxConfig {
    #[serde(default)]
    pub cycler: CyclerConfig,
    #[serde(default)]
    pub scramble: ScrambleConfig,
}

/// Tuning for the banner word cycler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CyclerConfig {
    /// Display duration per word in milliseconds
    #[serde(default = "default_cycler_step")]
    pub step_ms: u64,
    /// The transition into the last word is stretched by this factor
    #[serde(default = "default_final_step_scale")]
    pub final_step_scale: f64,
    /// Easing applied to the enter/exit fade
    #[serde(default = "default_easing")]
    pub easing: EasingType,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            step_ms: default_cycler_step(),
            final_step_scale: default_final_step_scale(),
            easing: default_easing(),
        }
    }
}

impl CyclerConfig {
    #[inline]
    pub fn step_duration(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    #[inline]
    pub fn final_step_duration(&self) -> Duration {
        // Rounded: 1.4 is not exactly representable and truncation would
        // land the deadline a millisecond early.
        Duration::from_millis((self.step_ms as f64 * self.final_step_scale.max(0.0)).round() as u64)
    }
}

/// Tuning for the section-title scramble reveal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Interval between scramble frames in milliseconds
    #[serde(default = "default_scramble_tick")]
    pub tick_ms: u64,
    /// Delay before the first frame in milliseconds
    #[serde(default)]
    pub start_delay_ms: u64,
    /// How many leading characters lock in per frame (fractional)
    #[serde(default = "default_resolve_per_tick")]
    pub resolve_per_tick: f64,
    /// Pool of substitute characters for unresolved positions
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Run once on startup instead of waiting for a trigger
    #[serde(default)]
    pub auto_start: bool,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_scramble_tick(),
            start_delay_ms: 0,
            resolve_per_tick: default_resolve_per_tick(),
            alphabet: default_alphabet(),
            auto_start: false,
        }
    }
}

impl ScrambleConfig {
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    #[inline]
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Focus the next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Focus the previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Move selection down within a section
    #[serde(default = "default_key_move_down")]
    pub move_down: String,
    /// Move selection up within a section
    #[serde(default = "default_key_move_up")]
    pub move_up: String,
    /// Open the selected item's link in the browser
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
    /// Replay the banner headline animation
    #[serde(default = "default_key_replay")]
    pub replay: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            move_down: default_key_move_down(),
            move_up: default_key_move_up(),
            open_link: default_key_open_link(),
            replay: default_key_replay(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_section() -> String { "l".to_string() }
fn default_key_prev_section() -> String { "h".to_string() }
fn default_key_move_down() -> String { "j".to_string() }
fn default_key_move_up() -> String { "k".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_replay() -> String { "r".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u16 {
    60
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_cycler_step() -> u64 {
    2800
}

fn default_final_step_scale() -> f64 {
    1.4
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_scramble_tick() -> u64 {
    30
}

fn default_resolve_per_tick() -> f64 {
    1.0 / 3.0
}

fn default_alphabet() -> String {
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()_+".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            tracing::debug!("loaded config from {}", config_path.display());
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
    }

    /// Get the profile file path (with tilde expansion)
    pub fn profile_path(&self) -> PathBuf {
        match &self.general.profile {
            Some(path) => expand_tilde(path),
            None => Self::config_dir().join("profile.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.fx.cycler.step_ms, 2800);
        assert!((config.fx.cycler.final_step_scale - 1.4).abs() < 1e-9);
        assert_eq!(config.fx.scramble.tick_ms, 30);
        assert!((config.fx.scramble.resolve_per_tick - 1.0 / 3.0).abs() < 1e-9);
        assert!(!config.fx.scramble.auto_start);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
    }

    #[test]
    fn test_durations() {
        let cycler = CyclerConfig::default();
        assert_eq!(cycler.step_duration(), Duration::from_millis(2800));
        assert_eq!(cycler.final_step_duration(), Duration::from_millis(3920));

        let scramble = ScrambleConfig::default();
        assert_eq!(scramble.tick_interval(), Duration::from_millis(30));
        assert_eq!(scramble.start_delay(), Duration::ZERO);
    }

    #[test]
    fn test_theme_config_from_string() {
        let config: AppConfig = toml::from_str("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
    }

    #[test]
    fn test_theme_config_from_map() {
        let config: AppConfig = toml::from_str(
            "[ui.theme]\nname = \"catppuccin-mocha\"\n\n[ui.theme.colors]\naccent = \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "catppuccin-mocha");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("[fx.cycler]\nstep_ms = 1000\n").unwrap();
        assert_eq!(config.fx.cycler.step_ms, 1000);
        assert!((config.fx.cycler.final_step_scale - 1.4).abs() < 1e-9);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }
}
