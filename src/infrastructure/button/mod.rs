//! Button input adapters

#[cfg(target_os = "linux")]
mod gpio;
mod manual;

#[cfg(target_os = "linux")]
pub use gpio::GpioButton;
pub use manual::{ManualButton, ManualTrigger};
