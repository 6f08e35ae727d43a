//! Silent player adapter
//!
//! Used when audio output is disabled (`player = "none"`).

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{PlaybackError, SoundPlayer};

/// Player that only logs what it would have played
pub struct SilentPlayer;

impl SilentPlayer {
    /// Create a new silent player
    pub fn new() -> Self {
        Self
    }
}

impl Default for SilentPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SoundPlayer for SilentPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        debug!("Audio disabled, skipping {}", path.display());
        Ok(())
    }
}
