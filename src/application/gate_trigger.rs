//! Gate trigger use case
//!
//! One activation: acknowledge the press with a sound, ask the gate to open,
//! then queue the success or error cue. Safe to run concurrently with itself.

use tracing::{error, info};

use crate::domain::sound::SoundId;

use super::ports::GateClient;
use super::sound_queue::SoundQueue;

/// How an activation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The gate endpoint answered 2xx
    Opened,
    /// Timeout, transport error or non-2xx answer
    Failed,
}

impl TriggerOutcome {
    /// The cue announcing this outcome
    pub fn sound(&self) -> SoundId {
        match self {
            Self::Opened => SoundId::Open,
            Self::Failed => SoundId::Error,
        }
    }
}

/// Gate trigger use case
pub struct GateTrigger<G: GateClient> {
    gate: G,
    sounds: SoundQueue,
}

impl<G: GateClient> GateTrigger<G> {
    /// Create a trigger that reports through `sounds`
    pub fn new(gate: G, sounds: SoundQueue) -> Self {
        Self { gate, sounds }
    }

    /// Run one activation. Failures end here: they are logged and announced
    /// with the error cue, never returned as errors.
    pub async fn activate(&self) -> TriggerOutcome {
        self.sounds.enqueue(SoundId::Press);

        let outcome = match self.gate.trigger().await {
            Ok(response) => {
                info!(
                    "Response from {}: {}, {}",
                    self.gate.endpoint(),
                    response.status,
                    response.body
                );
                info!("Relay trigger successful");
                TriggerOutcome::Opened
            }
            Err(e) => {
                error!("{} returned {}", self.gate.endpoint(), e);
                TriggerOutcome::Failed
            }
        };

        self.sounds.enqueue(outcome.sound());
        outcome
    }
}
