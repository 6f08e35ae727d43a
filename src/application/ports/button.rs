//! Button input port interface

use std::sync::Arc;

use thiserror::Error;

use crate::domain::timing::Duration;

/// Called once per accepted press. Runs on the input driver's thread and
/// must return immediately.
pub type PressHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// Button input errors
#[derive(Debug, Error)]
pub enum ButtonError {
    #[error("GPIO unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to configure pin {pin}: {message}")]
    PinSetup { pin: u8, message: String },

    #[error("Failed to register edge watcher: {0}")]
    WatchFailed(String),

    #[error("Button source is already being watched")]
    AlreadyWatching,
}

/// Port for a debounced falling-edge input.
///
/// Once a press has been delivered, further edges within `debounce` are
/// suppressed by the source itself.
pub trait ButtonSource: Send {
    /// Start delivering accepted presses to `on_press`.
    fn watch(&mut self, debounce: Duration, on_press: PressHandler) -> Result<(), ButtonError>;

    /// Short description for logs (e.g. "GPIO BCM 4")
    fn describe(&self) -> String;
}
