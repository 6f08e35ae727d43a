//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::timing::Duration;

/// Default BCM pin the button is wired to (button between pin and ground)
pub const DEFAULT_PIN: u8 = 4;

/// Default gate actuation endpoint
pub const DEFAULT_GATE_URL: &str = "http://gatecontrol/trigger";

/// Default directory holding the feedback sounds
pub const DEFAULT_MEDIA_DIR: &str = "/home/pi/media";

/// Default audio player executable
pub const DEFAULT_PLAYER: &str = "/usr/bin/aplay";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Button input section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpioConfig {
    pub pin: Option<u8>,
    pub debounce: Option<String>,
}

/// Gate endpoint section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    pub url: Option<String>,
    pub timeout: Option<String>,
}

/// Audio output section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConfig {
    pub media_dir: Option<PathBuf>,
    pub player: Option<String>,
}

/// Per-cue file name overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundsConfig {
    pub press: Option<String>,
    pub open: Option<String>,
    pub error: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub log_level: Option<String>,
    pub gpio: Option<GpioConfig>,
    pub gate: Option<GateConfig>,
    pub audio: Option<AudioConfig>,
    pub sounds: Option<SoundsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
            gpio: Some(GpioConfig {
                pin: Some(DEFAULT_PIN),
                debounce: Some(Duration::default_debounce().to_string()),
            }),
            gate: Some(GateConfig {
                url: Some(DEFAULT_GATE_URL.to_string()),
                timeout: Some(Duration::default_gate_timeout().to_string()),
            }),
            audio: Some(AudioConfig {
                media_dir: Some(PathBuf::from(DEFAULT_MEDIA_DIR)),
                player: Some(DEFAULT_PLAYER.to_string()),
            }),
            sounds: Some(SoundsConfig {
                press: Some("press.wav".to_string()),
                open: Some("open.wav".to_string()),
                error: Some("error.wav".to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            log_level: other.log_level.or(self.log_level),
            gpio: merge_section(self.gpio, other.gpio, |b, o| GpioConfig {
                pin: o.pin.or(b.pin),
                debounce: o.debounce.or(b.debounce),
            }),
            gate: merge_section(self.gate, other.gate, |b, o| GateConfig {
                url: o.url.or(b.url),
                timeout: o.timeout.or(b.timeout),
            }),
            audio: merge_section(self.audio, other.audio, |b, o| AudioConfig {
                media_dir: o.media_dir.or(b.media_dir),
                player: o.player.or(b.player),
            }),
            sounds: merge_section(self.sounds, other.sounds, |b, o| SoundsConfig {
                press: o.press.or(b.press),
                open: o.open.or(b.open),
                error: o.error.or(b.error),
            }),
        }
    }

    /// Get the BCM pin number, or the default pin if not set
    pub fn pin_or_default(&self) -> u8 {
        self.gpio.as_ref().and_then(|g| g.pin).unwrap_or(DEFAULT_PIN)
    }

    /// Get the raw debounce setting, if any
    pub fn debounce(&self) -> Option<&str> {
        self.gpio.as_ref().and_then(|g| g.debounce.as_deref())
    }

    /// Get the gate URL, or the default endpoint if not set
    pub fn gate_url_or_default(&self) -> &str {
        self.gate
            .as_ref()
            .and_then(|g| g.url.as_deref())
            .unwrap_or(DEFAULT_GATE_URL)
    }

    /// Get the raw gate timeout setting, if any
    pub fn gate_timeout(&self) -> Option<&str> {
        self.gate.as_ref().and_then(|g| g.timeout.as_deref())
    }

    /// Get the media directory, or the default if not set
    pub fn media_dir_or_default(&self) -> PathBuf {
        self.audio
            .as_ref()
            .and_then(|a| a.media_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR))
    }

    /// Get the player setting, or the default executable if not set
    pub fn player_or_default(&self) -> &str {
        self.audio
            .as_ref()
            .and_then(|a| a.player.as_deref())
            .unwrap_or(DEFAULT_PLAYER)
    }

    /// Get the log level, or "info" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Merge an optional config section, other taking precedence field by field
fn merge_section<T>(base: Option<T>, other: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (base, other) {
        (None, None) => None,
        (Some(b), None) => Some(b),
        (None, Some(o)) => Some(o),
        (Some(b), Some(o)) => Some(merge(b, o)),
    }
}
