//! Sound player port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while playing a sound file
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    /// The player executable could not be found
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// The player process could not be started
    #[error("Failed to start player: {0}")]
    SpawnFailed(String),

    /// The player ran but reported failure
    #[error("Player exited with {status}")]
    NonZeroExit { status: String },

    /// The sound file does not exist
    #[error("Sound file not found: {0}")]
    FileNotFound(String),

    /// Decoding or output failed
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for playing a single sound file to completion
#[async_trait]
pub trait SoundPlayer: Send + Sync {
    /// Play the file at `path` and return once playback has finished.
    async fn play(&self, path: &Path) -> Result<(), PlaybackError>;
}

/// Blanket implementation for boxed player types
#[async_trait]
impl SoundPlayer for Box<dyn SoundPlayer> {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        self.as_ref().play(path).await
    }
}
