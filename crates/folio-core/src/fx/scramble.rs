//! Scramble-and-reveal effect for section titles.
//!
//! Starting from a fully scrambled rendering, the target text locks in
//! left to right by a fractional amount per frame. Stopping at any point
//! snaps the display to the true text, never the scrambled intermediate.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::ScrambleConfig;

use super::Phase;

/// Scramble reveal engine
///
/// The display starts equal to the target (effect off). `start()` schedules
/// the run, `tick()` produces frames as their deadlines come due, `stop()`
/// cancels everything and restores the target text. At most one delay
/// deadline and one frame deadline exist at any time; both are cleared
/// before any reschedule, so a superseded run cannot touch the display.
#[derive(Debug, Clone)]
pub struct ScrambleReveal {
    target: Vec<char>,
    display: String,
    alphabet: Vec<char>,
    config: ScrambleConfig,
    resolved: f64,
    phase: Phase,
    delay_until: Option<Instant>,
    next_frame: Option<Instant>,
    rng: SmallRng,
}

impl ScrambleReveal {
    pub fn new(text: &str, config: ScrambleConfig) -> Self {
        Self::with_rng(text, config, SmallRng::from_os_rng())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(text: &str, config: ScrambleConfig, seed: u64) -> Self {
        Self::with_rng(text, config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(text: &str, config: ScrambleConfig, rng: SmallRng) -> Self {
        Self {
            target: text.chars().collect(),
            display: text.to_string(),
            alphabet: config.alphabet.chars().collect(),
            config,
            resolved: 0.0,
            phase: Phase::Idle,
            delay_until: None,
            next_frame: None,
            rng,
        }
    }

    /// Begin (or begin again) a scramble run.
    ///
    /// Outstanding deadlines are cancelled first, so re-entering while a
    /// previous run is mid-flight restarts cleanly from zero progress.
    pub fn start(&mut self, now: Instant) {
        self.delay_until = None;
        self.next_frame = None;
        self.resolved = 0.0;

        // Degenerate inputs are treated as already resolved.
        if self.target.is_empty() || self.alphabet.is_empty() {
            self.display = self.target.iter().collect();
            self.phase = Phase::Done;
            return;
        }

        let delay = self.config.start_delay();
        if delay.is_zero() {
            self.phase = Phase::Running;
            self.next_frame = Some(now + self.config.tick_interval());
        } else {
            self.phase = Phase::Delayed;
            self.delay_until = Some(now + delay);
        }
    }

    /// Cancel any outstanding run and snap the display to the target text.
    pub fn stop(&mut self) {
        self.delay_until = None;
        self.next_frame = None;
        self.resolved = 0.0;
        self.display = self.target.iter().collect();
        self.phase = Phase::Idle;
    }

    /// Advance the effect. Returns true if the display changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Delayed {
            match self.delay_until {
                Some(until) if now >= until => {
                    self.delay_until = None;
                    self.phase = Phase::Running;
                    self.next_frame = Some(until + self.config.tick_interval());
                }
                _ => return false,
            }
        }

        if self.phase != Phase::Running {
            return false;
        }

        let mut changed = false;
        while let Some(due) = self.next_frame {
            if due > now {
                break;
            }
            self.render_frame();
            changed = true;

            if self.resolved >= self.target.len() as f64 {
                // Fully resolved: the frame above rendered the target
                // verbatim, nothing left to schedule.
                self.next_frame = None;
                self.phase = Phase::Done;
                break;
            }
            self.resolved += self.config.resolve_per_tick;
            self.next_frame = Some(due + self.config.tick_interval());
        }
        changed
    }

    fn render_frame(&mut self) {
        let locked = self.resolved.floor() as usize;
        self.display = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &ch)| {
                if ch == ' ' {
                    // Spaces never scramble.
                    ' '
                } else if i < locked {
                    ch
                } else {
                    self.alphabet[self.rng.random_range(0..self.alphabet.len())]
                }
            })
            .collect();
    }

    /// The string the host should render right now.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The target text the display resolves to.
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the host should keep ticking at animation cadence.
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Delayed | Phase::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SEED: u64 = 7;

    fn config() -> ScrambleConfig {
        ScrambleConfig::default()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Drive the effect to its terminal phase, one frame interval at a time.
    fn run_to_completion(fx: &mut ScrambleReveal, t0: Instant) -> u64 {
        fx.start(t0);
        let mut offset = 0;
        while fx.is_animating() {
            offset += fx.config.tick_ms;
            fx.tick(t0 + ms(offset));
            assert!(offset < 60_000, "effect failed to terminate");
        }
        offset
    }

    #[test]
    fn test_display_starts_resolved() {
        let fx = ScrambleReveal::with_seed("PROJECTS", config(), SEED);
        assert_eq!(fx.display(), "PROJECTS");
        assert_eq!(fx.phase(), Phase::Idle);
    }

    #[test]
    fn test_natural_completion_resolves_exactly() {
        let mut fx = ScrambleReveal::with_seed("SELECTED WORKS", config(), SEED);
        let t0 = Instant::now();
        run_to_completion(&mut fx, t0);

        assert_eq!(fx.phase(), Phase::Done);
        assert_eq!(fx.display(), "SELECTED WORKS");
        // No frame deadline remains; further ticks are no-ops.
        assert!(!fx.tick(t0 + ms(120_000)));
        assert_eq!(fx.display(), "SELECTED WORKS");
    }

    #[test]
    fn test_resolution_is_gradual_left_to_right() {
        let mut fx = ScrambleReveal::with_seed("ABCDEF", config(), SEED);
        let t0 = Instant::now();
        fx.start(t0);

        // After 9 frames, floor(8 * 1/3) = 2 characters are locked.
        for i in 1..=9 {
            fx.tick(t0 + ms(i * 30));
        }
        assert!(fx.display().starts_with("AB"));
        assert_ne!(fx.display(), "ABCDEF");
    }

    #[test]
    fn test_early_stop_snaps_to_target() {
        let mut fx = ScrambleReveal::with_seed("EDUCATION", config(), SEED);
        let t0 = Instant::now();
        fx.start(t0);
        fx.tick(t0 + ms(30));
        assert_ne!(fx.display(), "EDUCATION");

        fx.stop();
        assert_eq!(fx.display(), "EDUCATION");
        assert_eq!(fx.phase(), Phase::Idle);
        // The cancelled run's frames never fire.
        assert!(!fx.tick(t0 + ms(60)));
        assert_eq!(fx.display(), "EDUCATION");
    }

    #[test]
    fn test_spaces_always_preserved() {
        let mut fx = ScrambleReveal::with_seed("AI LAB", config(), SEED);
        let t0 = Instant::now();
        fx.start(t0);
        for i in 1..=30 {
            fx.tick(t0 + ms(i * 30));
            assert_eq!(fx.display().chars().nth(2), Some(' '));
        }
    }

    #[test]
    fn test_unresolved_positions_draw_from_alphabet() {
        let cfg = ScrambleConfig {
            alphabet: "#@".to_string(),
            ..Default::default()
        };
        let mut fx = ScrambleReveal::with_seed("XYZ", cfg, SEED);
        let t0 = Instant::now();
        fx.start(t0);
        fx.tick(t0 + ms(30));
        for ch in fx.display().chars() {
            assert!(ch == '#' || ch == '@');
        }
    }

    #[test]
    fn test_start_delay_defers_first_frame() {
        let cfg = ScrambleConfig {
            start_delay_ms: 500,
            ..Default::default()
        };
        let mut fx = ScrambleReveal::with_seed("RESEARCH", cfg, SEED);
        let t0 = Instant::now();
        fx.start(t0);
        assert_eq!(fx.phase(), Phase::Delayed);

        assert!(!fx.tick(t0 + ms(499)));
        assert_eq!(fx.display(), "RESEARCH");

        // First frame lands one interval after the delay elapses.
        assert!(!fx.tick(t0 + ms(500)));
        assert_eq!(fx.phase(), Phase::Running);
        assert!(fx.tick(t0 + ms(530)));
        assert_ne!(fx.display(), "RESEARCH");
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut fx = ScrambleReveal::with_seed("ABCDEF", config(), SEED);
        let t0 = Instant::now();
        fx.start(t0);
        for i in 1..=12 {
            fx.tick(t0 + ms(i * 30));
        }
        assert!(fx.display().starts_with("ABC"));

        // Re-enter mid-run: progress starts over from zero.
        let t1 = t0 + ms(400);
        fx.start(t1);
        fx.tick(t1 + ms(30));
        let locked: usize = fx
            .display()
            .chars()
            .zip("ABCDEF".chars())
            .take_while(|(a, b)| a == b)
            .count();
        assert!(locked < 3, "restart did not reset progress");
    }

    #[test]
    fn test_empty_target_is_noop() {
        let mut fx = ScrambleReveal::with_seed("", config(), SEED);
        let t0 = Instant::now();
        fx.start(t0);
        assert_eq!(fx.phase(), Phase::Done);
        assert_eq!(fx.display(), "");
        assert!(!fx.tick(t0 + ms(30)));
    }

    #[test]
    fn test_empty_alphabet_is_treated_as_resolved() {
        let cfg = ScrambleConfig {
            alphabet: String::new(),
            ..Default::default()
        };
        let mut fx = ScrambleReveal::with_seed("BANNER", cfg, SEED);
        let t0 = Instant::now();
        fx.start(t0);
        assert_eq!(fx.phase(), Phase::Done);
        assert_eq!(fx.display(), "BANNER");
    }

    #[test]
    fn test_same_seed_same_frames() {
        let t0 = Instant::now();
        let mut a = ScrambleReveal::with_seed("DETERMINISM", config(), SEED);
        let mut b = ScrambleReveal::with_seed("DETERMINISM", config(), SEED);
        a.start(t0);
        b.start(t0);
        for i in 1..=20 {
            a.tick(t0 + ms(i * 30));
            b.tick(t0 + ms(i * 30));
            assert_eq!(a.display(), b.display());
        }
    }

    #[test]
    fn test_single_char_resolves_quickly() {
        let mut fx = ScrambleReveal::with_seed("X", config(), SEED);
        let t0 = Instant::now();
        let elapsed = run_to_completion(&mut fx, t0);
        assert_eq!(fx.display(), "X");
        // 1 char at 1/3 per frame: done within a handful of frames.
        assert!(elapsed <= 5 * 30);
    }
}
