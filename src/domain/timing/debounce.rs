//! Falling-edge debouncer
//!
//! Mirrors the contract of the GPIO driver's interrupt debounce so that
//! software button sources behave exactly like the hardware one.
//!
//! State machine:
//!   IDLE -> DEBOUNCING (edge accepted)
//!   DEBOUNCING -> IDLE (window elapsed)
//!
//! Edges arriving while DEBOUNCING are suppressed and do not extend the window.

use std::fmt;
use std::time::Instant;

use super::Duration;

/// Debouncer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DebounceState {
    #[default]
    Idle,
    Debouncing,
}

impl DebounceState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Debouncing => "debouncing",
        }
    }
}

impl fmt::Display for DebounceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accepts the first edge and suppresses every edge within `window` after it.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer in idle state
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// The configured debounce window
    pub fn window(&self) -> Duration {
        self.window
    }

    /// State as observed at `now`
    pub fn state_at(&self, now: Instant) -> DebounceState {
        match self.last_accepted {
            Some(at) if now.saturating_duration_since(at) < self.window.as_std() => {
                DebounceState::Debouncing
            }
            _ => DebounceState::Idle,
        }
    }

    /// Offer an edge observed at `now`. Returns true if it is accepted.
    pub fn accept(&mut self, now: Instant) -> bool {
        if self.state_at(now) == DebounceState::Debouncing {
            return false;
        }
        self.last_accepted = Some(now);
        true
    }
}
