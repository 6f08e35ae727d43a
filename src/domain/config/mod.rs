//! Configuration domain module

mod app_config;
mod settings;

pub use app_config::{AppConfig, AudioConfig, GateConfig, GpioConfig, SoundsConfig};
pub use settings::{PlayerKind, ServiceSettings};
