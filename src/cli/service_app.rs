//! Service runner: wire button, gate and sound worker, then idle

use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::application::ports::{ButtonError, ButtonSource, GateClient, GateError};
use crate::application::{GateTrigger, PressDispatcher, SoundQueue};
use crate::domain::config::ServiceSettings;
use crate::infrastructure::{HttpGateClient, ManualButton, ManualTrigger};

use super::app::{spawn_sound_worker, EXIT_ERROR, EXIT_SUCCESS};
use super::presenter::Presenter;
use super::signals::ShutdownListener;

/// Startup failures. Nothing after startup is fatal.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to create HTTP client: {0}")]
    Gate(#[from] GateError),

    #[error("Button setup failed: {0}")]
    Button(#[from] ButtonError),

    #[error("Failed to install signal handlers: {0}")]
    Signals(#[from] std::io::Error),
}

/// Connect `button` to a gate trigger that reports through `sounds`.
///
/// Each accepted press spawns an independent activation on the current
/// runtime; the button callback itself never waits.
pub fn watch_button<B, G>(
    button: &mut B,
    gate: G,
    sounds: SoundQueue,
    settings: &ServiceSettings,
) -> Result<(), ServiceError>
where
    B: ButtonSource + ?Sized,
    G: GateClient + 'static,
{
    let trigger = Arc::new(GateTrigger::new(gate, sounds));
    let handler = PressDispatcher::new(trigger, Handle::current()).into_handler();
    button.watch(settings.debounce, handler)?;
    info!(
        "Watching {} (falling edge, debounce {})",
        button.describe(),
        settings.debounce
    );
    Ok(())
}

/// Run the service until SIGINT/SIGTERM
pub async fn run_service(settings: ServiceSettings, simulate: bool) -> ExitCode {
    let presenter = Presenter::new();

    match serve(settings, simulate).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            error!("{}", e);
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn serve(settings: ServiceSettings, simulate: bool) -> Result<(), ServiceError> {
    info!(
        pin = settings.pin,
        url = %settings.gate_url,
        timeout = %settings.gate_timeout,
        media_dir = %settings.sounds.media_dir().display(),
        "Starting gpio listener"
    );

    let mut shutdown = ShutdownListener::new()?;
    let gate = HttpGateClient::new(settings.gate_url.clone(), settings.gate_timeout)?;
    let (sounds, worker) = spawn_sound_worker(&settings);
    tokio::spawn(watch_sound_worker(worker));

    // Keep the button alive for the lifetime of the service
    let _button: Box<dyn ButtonSource> = if simulate {
        let mut button = ManualButton::new();
        let presses = button.trigger();
        watch_button(&mut button, gate, sounds, &settings)?;
        tokio::spawn(read_simulated_presses(presses));
        Box::new(button)
    } else {
        let mut button = gpio_button(settings.pin)?;
        watch_button(button.as_mut(), gate, sounds, &settings)?;
        button
    };

    let signal = shutdown.recv().await;
    info!("Received {}, shutting down", signal);
    Ok(())
}

/// Log the sound worker ending. It only returns once every producer is gone.
pub(crate) async fn watch_sound_worker(worker: JoinHandle<()>) {
    match worker.await {
        Ok(()) => warn!("Sound worker stopped, feedback sounds are disabled"),
        Err(e) => error!("Sound worker failed: {}, feedback sounds are disabled", e),
    }
}

/// Every line on stdin is one falling edge
async fn read_simulated_presses(presses: ManualTrigger) {
    info!("Simulated button: press Enter to send a falling edge");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(_)) => {
                if !presses.press() {
                    debug!("Press suppressed by debounce");
                }
            }
            Ok(None) => {
                info!("stdin closed, no more simulated presses");
                return;
            }
            Err(e) => {
                warn!("Failed to read stdin: {}", e);
                return;
            }
        }
    }
}

#[cfg(target_os = "linux")]
fn gpio_button(pin: u8) -> Result<Box<dyn ButtonSource>, ServiceError> {
    Ok(Box::new(crate::infrastructure::GpioButton::new(pin)))
}

#[cfg(not(target_os = "linux"))]
fn gpio_button(_pin: u8) -> Result<Box<dyn ButtonSource>, ServiceError> {
    Err(ButtonError::Unavailable("GPIO input requires Linux; use --simulate".to_string()).into())
}
