//! Domain layer - Core values
//!
//! Contains value objects, configuration and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod sound;
pub mod timing;

// Re-export common types
pub use config::{AppConfig, PlayerKind, ServiceSettings};
pub use error::*;
pub use sound::{SoundId, SoundLibrary};
pub use timing::{Debouncer, DebounceState, Duration};
