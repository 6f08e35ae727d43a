//! Rodio-based in-process player
//!
//! Decodes and plays sound files without an external executable.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};

use crate::application::ports::{PlaybackError, SoundPlayer};

/// Audio player implementation using rodio
pub struct RodioPlayer;

impl RodioPlayer {
    /// Create a new rodio-based player
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SoundPlayer for RodioPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let path = path.to_path_buf();
        // Output streams are not Send; play on a blocking thread
        tokio::task::spawn_blocking(move || play_file_sync(&path))
            .await
            .map_err(|e| PlaybackError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

/// Play a file to completion (called from spawn_blocking)
fn play_file_sync(path: &Path) -> Result<(), PlaybackError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PlaybackError::FileNotFound(path.display().to_string())
        } else {
            PlaybackError::PlaybackFailed(e.to_string())
        }
    })?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| PlaybackError::PlaybackFailed(format!("decode {}: {}", path.display(), e)))?;

    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| PlaybackError::PlaybackFailed(format!("no audio device: {}", e)))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| PlaybackError::PlaybackFailed(e.to_string()))?;

    sink.append(source);
    sink.sleep_until_end();

    Ok(())
}
