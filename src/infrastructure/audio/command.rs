//! External player adapter (aplay and friends)

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

use crate::application::ports::{PlaybackError, SoundPlayer};

/// Plays a file by running `<program> <file>` and waiting for it to exit
pub struct CommandPlayer {
    program: PathBuf,
}

impl CommandPlayer {
    /// Create a player running `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl SoundPlayer for CommandPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        // kill_on_drop: a cancelled worker must not leave the child behind
        let status = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PlaybackError::PlayerNotFound(self.program.display().to_string())
                } else {
                    PlaybackError::SpawnFailed(e.to_string())
                }
            })?;

        match status.code() {
            Some(code) => info!("{} returned {}", self.program.display(), code),
            None => info!("{} terminated by signal", self.program.display()),
        }

        if !status.success() {
            return Err(PlaybackError::NonZeroExit {
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
