//! Entrance animation timer
//!
//! The dashboard cards start hidden and scale in once, a fixed delay after the
//! view mounts. The timer is a deadline owned by the view: the repaint loop
//! polls it, and tearing the view down cancels it so a dead view is never
//! touched.

use std::time::{Duration, Instant};

/// Timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not started yet
    Hidden,
    /// Waiting for the deadline
    Scheduled { deadline: Instant },
    /// Fired. Terminal.
    Visible,
    /// Cancelled before firing. Terminal.
    Cancelled,
}

/// One-shot `hidden -> visible` timer
#[derive(Debug, Clone)]
pub struct RevealTimer {
    delay: Duration,
    phase: RevealPhase,
}

impl RevealTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: RevealPhase::Hidden,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Schedule the reveal. Only the first call has any effect.
    pub fn start(&mut self, now: Instant) {
        if self.phase == RevealPhase::Hidden {
            self.phase = RevealPhase::Scheduled {
                deadline: now + self.delay,
            };
        }
    }

    /// Advance the timer. Returns `true` on the single poll that flips it visible.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            RevealPhase::Scheduled { deadline } if now >= deadline => {
                self.phase = RevealPhase::Visible;
                true
            }
            _ => false,
        }
    }

    /// Time left until the reveal, while scheduled
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            RevealPhase::Scheduled { deadline } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Drop a pending reveal
    pub fn cancel(&mut self) {
        if matches!(self.phase, RevealPhase::Hidden | RevealPhase::Scheduled { .. }) {
            self.phase = RevealPhase::Cancelled;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }
}
