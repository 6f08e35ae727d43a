//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with GPIO, the gate's HTTP endpoint, audio output
//! and the config file.

pub mod audio;
pub mod button;
pub mod config;
pub mod gate;

// Re-export adapters
pub use audio::{create_player, CommandPlayer, RodioPlayer, SilentPlayer};
#[cfg(target_os = "linux")]
pub use button::GpioButton;
pub use button::{ManualButton, ManualTrigger};
pub use config::TomlConfigStore;
pub use gate::HttpGateClient;
