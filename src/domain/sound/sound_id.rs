//! Sound identifier value object

use std::fmt;

/// A request to play one of the feedback cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// Acknowledges that a press was received
    Press,
    /// The gate accepted the trigger
    Open,
    /// The trigger failed (timeout, connection error, non-2xx)
    Error,
}

impl SoundId {
    /// File name used when no override is configured
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Press => "press.wav",
            Self::Open => "open.wav",
            Self::Error => "error.wav",
        }
    }

    /// Logical name of the sound
    pub fn name(&self) -> &'static str {
        match self {
            Self::Press => "press",
            Self::Open => "open",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_file_names() {
        assert_eq!(SoundId::Press.default_file_name(), "press.wav");
        assert_eq!(SoundId::Open.default_file_name(), "open.wav");
        assert_eq!(SoundId::Error.default_file_name(), "error.wav");
    }

    #[test]
    fn display_uses_cue_name() {
        assert_eq!(SoundId::Press.to_string(), "press");
        assert_eq!(SoundId::Error.to_string(), "error");
    }
}
