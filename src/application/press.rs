//! Hand-off from the button interrupt path to the async runtime

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{error, info};

use super::gate_trigger::GateTrigger;
use super::ports::{GateClient, PressHandler};

/// Turns accepted presses into detached gate trigger tasks.
///
/// `on_press` only spawns and returns, so it is safe to call from the GPIO
/// driver's interrupt thread.
pub struct PressDispatcher<G: GateClient + 'static> {
    trigger: Arc<GateTrigger<G>>,
    runtime: Handle,
}

impl<G: GateClient + 'static> PressDispatcher<G> {
    /// Create a dispatcher spawning onto `runtime`
    pub fn new(trigger: Arc<GateTrigger<G>>, runtime: Handle) -> Self {
        Self { trigger, runtime }
    }

    /// Handle one accepted press
    pub fn on_press(&self) {
        info!("Button pressed, sending trigger");

        let trigger = Arc::clone(&self.trigger);
        let task = self.runtime.spawn(async move { trigger.activate().await });

        // Nobody awaits the activation itself; surface panics in the log.
        self.runtime.spawn(async move {
            if let Err(e) = task.await {
                error!("Gate trigger task failed: {}", e);
            }
        });
    }

    /// Wrap into the callback type button sources expect
    pub fn into_handler(self) -> PressHandler {
        let dispatcher = Arc::new(self);
        Arc::new(move || dispatcher.on_press())
    }
}
