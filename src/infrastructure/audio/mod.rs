//! Audio player adapters
//!
//! Play queued sounds through an external executable, rodio, or not at all.

mod command;
mod rodio;
mod silent;

pub use command::CommandPlayer;
pub use self::rodio::RodioPlayer;
pub use silent::SilentPlayer;

use crate::application::ports::SoundPlayer;
use crate::domain::config::PlayerKind;

/// Create the player adapter selected in the settings
pub fn create_player(kind: &PlayerKind) -> Box<dyn SoundPlayer> {
    match kind {
        PlayerKind::Command(program) => Box::new(CommandPlayer::new(program)),
        PlayerKind::Rodio => Box::new(RodioPlayer::new()),
        PlayerKind::Silent => Box::new(SilentPlayer::new()),
    }
}
