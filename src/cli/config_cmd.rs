//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ServiceSettings};
use crate::domain::error::ConfigError;
use crate::infrastructure::TomlConfigStore;

use super::app::load_merged_config;
use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    cli_config: AppConfig,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
        ConfigAction::Show => handle_show(store, cli_config, presenter).await,
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Print the merged configuration, after checking it would start the service
async fn handle_show<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    let config = load_merged_config(store, cli_config).await?;
    ServiceSettings::from_config(&config)?;

    let source = if store.exists() {
        store.path().display().to_string()
    } else {
        "(defaults, no config file)".to_string()
    };
    presenter.key_value("# source", &source);
    presenter.output(&TomlConfigStore::to_toml(&config)?);
    Ok(())
}
