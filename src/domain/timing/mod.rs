//! Timing value objects: configured durations and the press debouncer

mod debounce;
mod duration;

pub use debounce::{Debouncer, DebounceState};
pub use duration::{
    Duration, DEFAULT_DEBOUNCE_MS, DEFAULT_GATE_TIMEOUT_MS,
};
