//! Validated service settings

use std::path::PathBuf;

use crate::domain::error::ConfigError;
use crate::domain::sound::{SoundId, SoundLibrary};
use crate::domain::timing::Duration;

use super::AppConfig;

/// Which audio backend plays the queued sounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerKind {
    /// External executable invoked with the file path as its only argument
    Command(PathBuf),
    /// In-process decoding and playback
    Rodio,
    /// Log only, play nothing
    Silent,
}

impl PlayerKind {
    /// Parse the `audio.player` setting
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim() {
            "" => Err(ConfigError::ValidationError {
                key: "audio.player".to_string(),
                message: "must not be empty".to_string(),
            }),
            "rodio" => Ok(Self::Rodio),
            "none" => Ok(Self::Silent),
            path => Ok(Self::Command(PathBuf::from(path))),
        }
    }
}

/// Fully resolved settings the service runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub pin: u8,
    pub debounce: Duration,
    pub gate_url: String,
    pub gate_timeout: Duration,
    pub sounds: SoundLibrary,
    pub player: PlayerKind,
    pub log_level: String,
}

impl ServiceSettings {
    /// Validate a merged config. Unset values take their defaults.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let debounce = parse_duration("gpio.debounce", config.debounce())?
            .unwrap_or_else(Duration::default_debounce);
        let gate_timeout = parse_duration("gate.timeout", config.gate_timeout())?
            .unwrap_or_else(Duration::default_gate_timeout);

        let gate_url = config.gate_url_or_default().to_string();
        if !(gate_url.starts_with("http://") || gate_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                key: "gate.url".to_string(),
                message: format!("expected an http(s) URL, got \"{}\"", gate_url),
            });
        }

        let mut sounds = SoundLibrary::new(config.media_dir_or_default());
        if let Some(cues) = &config.sounds {
            let cue = |value: &Option<String>, id: SoundId| {
                value
                    .clone()
                    .unwrap_or_else(|| id.default_file_name().to_string())
            };
            sounds = sounds.with_cues(
                cue(&cues.press, SoundId::Press),
                cue(&cues.open, SoundId::Open),
                cue(&cues.error, SoundId::Error),
            );
        }

        Ok(Self {
            pin: config.pin_or_default(),
            debounce,
            gate_url,
            gate_timeout,
            sounds,
            player: PlayerKind::parse(config.player_or_default())?,
            log_level: config.log_level_or_default().to_string(),
        })
    }
}

fn parse_duration(key: &str, raw: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    raw.map(|s| {
        s.parse::<Duration>()
            .map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            })
    })
    .transpose()
}
