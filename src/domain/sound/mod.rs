//! Sound domain module

mod library;
mod sound_id;

pub use library::SoundLibrary;
pub use sound_id::SoundId;
