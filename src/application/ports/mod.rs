//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod button;
pub mod config;
pub mod gate;
pub mod sound_player;

// Re-export common types
pub use button::{ButtonError, ButtonSource, PressHandler};
pub use config::ConfigStore;
pub use gate::{GateClient, GateError, GateResponse};
pub use sound_player::{PlaybackError, SoundPlayer};
