//! Word cycling effect for the banner headline.
//!
//! Shows one word at a time from a fixed list, advancing on a fixed cadence.
//! The transition into the last word is stretched by a configurable factor,
//! and the sequence holds there until an explicit restart.

use std::time::{Duration, Instant};

use crate::config::CyclerConfig;

use super::timing;
use super::Phase;

/// A scheduled transition into `index`, tagged with the epoch it was
/// scheduled under. Entries from a superseded epoch are discarded at fire
/// time, so a deadline that survived a restart can never advance the new run.
#[derive(Debug, Clone, Copy)]
struct StepDeadline {
    epoch: u64,
    due: Instant,
    index: usize,
}

/// Word cycling engine
///
/// Call `start()` to (re)run the sequence, then `tick()` each frame to fire
/// whatever transitions are due. `current()` and `transition_progress()`
/// expose what the renderer needs for the enter/hold/exit motion.
#[derive(Debug, Clone)]
pub struct WordCycler {
    words: Vec<String>,
    config: CyclerConfig,
    index: usize,
    epoch: u64,
    pending: Vec<StepDeadline>,
    phase: Phase,
    shown_at: Option<Instant>,
}

impl WordCycler {
    pub fn new(words: Vec<String>, config: CyclerConfig) -> Self {
        let phase = if words.len() > 1 { Phase::Idle } else { Phase::Done };
        Self {
            words,
            config,
            index: 0,
            epoch: 0,
            pending: Vec::new(),
            phase,
            shown_at: None,
        }
    }

    /// (Re)start the sequence from the first word.
    ///
    /// Every pending transition from the previous run is cancelled before
    /// the new ones are scheduled; the epoch bump makes any entry that
    /// somehow survives a no-op at fire time.
    pub fn start(&mut self, now: Instant) {
        self.epoch = self.epoch.wrapping_add(1);
        self.pending.clear();
        self.index = 0;
        self.shown_at = Some(now);

        if self.words.len() <= 1 {
            // Nothing to cycle through; a single word just sits there.
            self.phase = Phase::Done;
            return;
        }

        self.phase = Phase::Running;
        let step = self.config.step_duration();
        let mut due = now;
        for index in 1..self.words.len() {
            due += if index == self.words.len() - 1 {
                self.config.final_step_duration()
            } else {
                step
            };
            self.pending.push(StepDeadline { epoch: self.epoch, due, index });
        }
    }

    /// Replace the word list and restart against it.
    pub fn set_words(&mut self, words: Vec<String>, now: Instant) {
        self.words = words;
        self.start(now);
    }

    /// Fire every transition that is due. Returns true if the displayed
    /// word changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.pending.is_empty() {
            return false;
        }

        let epoch = self.epoch;
        self.pending.retain(|deadline| deadline.epoch == epoch);

        let mut changed = false;
        // Deadlines are scheduled in order; drain the due prefix.
        while let Some(next) = self.pending.first().copied() {
            if next.due > now {
                break;
            }
            self.pending.remove(0);
            self.index = next.index;
            self.shown_at = Some(next.due);
            changed = true;
        }

        if self.pending.is_empty() && self.phase == Phase::Running {
            self.phase = Phase::Done;
        }
        changed
    }

    /// The currently displayed word, or None for an empty list.
    pub fn current(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the sequence has settled on the final word.
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty() && self.index == self.words.len().saturating_sub(1)
    }

    /// Whether the current word is the last in the list.
    pub fn is_final_word(&self) -> bool {
        self.index == self.words.len().saturating_sub(1)
    }

    /// Whether the host should keep ticking at animation cadence: there is
    /// either a pending transition or the current word's display window is
    /// still playing out.
    pub fn is_animating(&self, now: Instant) -> bool {
        if !self.pending.is_empty() {
            return true;
        }
        match self.shown_at {
            Some(shown) => !timing::is_complete(shown, now, self.display_window()),
            None => false,
        }
    }

    /// Fractional progress through the current word's display window,
    /// clamped to [0.0, 1.0]. 1.0 before the first start.
    pub fn transition_progress(&self, now: Instant) -> f64 {
        match self.shown_at {
            Some(shown) => timing::progress(shown, now, self.display_window()),
            None => 1.0,
        }
    }

    fn display_window(&self) -> Duration {
        if self.is_final_word() {
            self.config.final_step_duration()
        } else {
            self.config.step_duration()
        }
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
