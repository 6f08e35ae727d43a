//! Config loading and the one-shot trigger command

use std::path::PathBuf;
use std::process::ExitCode;

use tokio::task::JoinHandle;
use tracing::info;

use crate::application::ports::ConfigStore;
use crate::application::{sound_queue, GateTrigger, SoundQueue, SoundWorker, TriggerOutcome};
use crate::domain::config::{AppConfig, ServiceSettings};
use crate::domain::error::ConfigError;
use crate::infrastructure::{create_player, HttpGateClient, TomlConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Config store for an explicit path, or the default location
pub fn config_store(path: Option<PathBuf>) -> TomlConfigStore {
    match path {
        Some(path) => TomlConfigStore::with_path(path),
        None => TomlConfigStore::new(),
    }
}

/// Load and merge configuration: defaults < file < CLI
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load().await?;
    Ok(AppConfig::defaults().merge(file_config).merge(cli_config))
}

/// Start the sound worker on the current runtime
pub fn spawn_sound_worker(settings: &ServiceSettings) -> (SoundQueue, JoinHandle<()>) {
    let (sounds, receiver) = sound_queue();
    let worker = SoundWorker::new(
        create_player(&settings.player),
        settings.sounds.clone(),
        receiver,
    );
    (sounds, tokio::spawn(worker.run()))
}

/// Run a single activation and wait for its sounds to finish playing
pub async fn run_trigger_once(settings: ServiceSettings) -> ExitCode {
    let presenter = Presenter::new();

    let gate = match HttpGateClient::new(settings.gate_url.clone(), settings.gate_timeout) {
        Ok(gate) => gate,
        Err(e) => {
            presenter.error(&format!("Failed to create HTTP client: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (sounds, _worker) = spawn_sound_worker(&settings);
    let trigger = GateTrigger::new(gate, sounds.clone());

    info!("Triggering {}", settings.gate_url);
    let outcome = trigger.activate().await;
    sounds.drained().await;

    match outcome {
        TriggerOutcome::Opened => {
            presenter.success("Gate triggered");
            ExitCode::from(EXIT_SUCCESS)
        }
        TriggerOutcome::Failed => {
            presenter.error("Gate trigger failed, see log for details");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
