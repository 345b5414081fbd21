//! Transient Errors
//!
//! An error flag that is shown on failure and cleared by a one-shot timer.
//! Each trigger bumps a generation so that a timer started for an older
//! error cannot hide a newer one.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransientError {
    shown: bool,
    generation: u64,
}

impl TransientError {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Show the error; the returned generation identifies this display.
    pub fn trigger(&mut self) -> u64 {
        self.generation += 1;
        self.shown = true;
        self.generation
    }

    /// Hide the error if `generation` is still the latest trigger.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if self.shown && generation == self.generation {
            self.shown = false;
            true
        } else {
            false
        }
    }
}
