//! Gate Button entry point

use std::process::ExitCode;

use clap::Parser;

use gate_button::cli::{
    config_store, handle_config_command, init_logging, load_merged_config, run_service,
    run_trigger_once, Cli, Commands, Presenter, EXIT_ERROR, EXIT_USAGE_ERROR,
};
use gate_button::domain::config::ServiceSettings;
use gate_button::domain::error::ConfigError;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();
    let store = config_store(cli.config.clone());
    let cli_config = cli.overrides.to_config();

    if let Some(Commands::Config { action }) = cli.command {
        if let Err(e) = handle_config_command(action, &store, cli_config, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(config_exit_code(&e));
        }
        return ExitCode::SUCCESS;
    }

    // Merge config: defaults < file < CLI
    let config = match load_merged_config(&store, cli_config).await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let settings = match ServiceSettings::from_config(&config) {
        Ok(settings) => settings,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    if let Err(e) = init_logging(&settings.log_level) {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    match cli.command {
        Some(Commands::Trigger) => run_trigger_once(settings).await,
        _ => run_service(settings, cli.simulate).await,
    }
}

/// Invalid configuration is a usage error; I/O failures are not
fn config_exit_code(error: &ConfigError) -> u8 {
    match error {
        ConfigError::ParseError(_) | ConfigError::ValidationError { .. } => EXIT_USAGE_ERROR,
        ConfigError::ReadError(_) | ConfigError::WriteError(_) | ConfigError::AlreadyExists(_) => {
            EXIT_ERROR
        }
    }
}
