//! Resolution of sound identifiers to files in the media directory

use std::path::{Path, PathBuf};

use super::SoundId;

/// Media directory plus the file names configured for each cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundLibrary {
    media_dir: PathBuf,
    press: String,
    open: String,
    error: String,
}

impl SoundLibrary {
    /// Library using the default cue file names
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            media_dir: media_dir.into(),
            press: SoundId::Press.default_file_name().to_string(),
            open: SoundId::Open.default_file_name().to_string(),
            error: SoundId::Error.default_file_name().to_string(),
        }
    }

    /// Override the cue file names
    pub fn with_cues(
        mut self,
        press: impl Into<String>,
        open: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        self.press = press.into();
        self.open = open.into();
        self.error = error.into();
        self
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// File name for a sound, after cue overrides
    pub fn file_name(&self, id: &SoundId) -> &str {
        match id {
            SoundId::Press => &self.press,
            SoundId::Open => &self.open,
            SoundId::Error => &self.error,
        }
    }

    /// Full path of the file to play
    pub fn resolve(&self, id: &SoundId) -> PathBuf {
        self.media_dir.join(self.file_name(id))
    }
}
