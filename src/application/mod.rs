//! Application layer - Use cases and port interfaces
//!
//! Contains the sound queue and worker, the gate trigger use case, the
//! press dispatcher and the trait definitions for external systems.

pub mod gate_trigger;
pub mod ports;
pub mod press;
pub mod sound_queue;

// Re-export use cases
pub use gate_trigger::{GateTrigger, TriggerOutcome};
pub use press::PressDispatcher;
pub use sound_queue::{sound_queue, SoundQueue, SoundReceiver, SoundWorker};
