//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::config::{AppConfig, AudioConfig, GateConfig, GpioConfig};

/// Gate Button - open the gate from a push button, with audio feedback
#[derive(Parser, Debug)]
#[command(name = "gate-button")]
#[command(version)]
#[command(about = "Watch a GPIO push button and trigger a gate over HTTP, with audio feedback")]
#[command(long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/gate-button/config.toml)
    #[arg(short = 'c', long, value_name = "FILE", env = "GATE_BUTTON_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    /// Read presses from stdin (one per line) instead of GPIO
    #[arg(long)]
    pub simulate: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Settings that override the config file
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// BCM pin number the button is wired to
    #[arg(short = 'p', long, value_name = "BCM", global = true)]
    pub pin: Option<u8>,

    /// Debounce window (e.g., 2000ms, 2s)
    #[arg(long, value_name = "TIME", global = true)]
    pub debounce: Option<String>,

    /// Gate trigger URL
    #[arg(short = 'u', long, value_name = "URL", global = true)]
    pub url: Option<String>,

    /// Gate request timeout (e.g., 2s)
    #[arg(short = 't', long, value_name = "TIME", global = true)]
    pub timeout: Option<String>,

    /// Directory containing the sound files
    #[arg(long, value_name = "DIR", global = true)]
    pub media_dir: Option<PathBuf>,

    /// Player executable, or "rodio" / "none"
    #[arg(long, value_name = "PLAYER", global = true)]
    pub player: Option<String>,

    /// Log level or filter directive (e.g., info, debug)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Trigger the gate once, play the feedback sounds and exit
    Trigger,
}

/// Config action subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Show config file path
    Path,
    /// Print the effective configuration
    Show,
}

impl Overrides {
    /// The CLI layer of the configuration
    pub fn to_config(&self) -> AppConfig {
        let gpio = (self.pin.is_some() || self.debounce.is_some()).then(|| GpioConfig {
            pin: self.pin,
            debounce: self.debounce.clone(),
        });
        let gate = (self.url.is_some() || self.timeout.is_some()).then(|| GateConfig {
            url: self.url.clone(),
            timeout: self.timeout.clone(),
        });
        let audio = (self.media_dir.is_some() || self.player.is_some()).then(|| AudioConfig {
            media_dir: self.media_dir.clone(),
            player: self.player.clone(),
        });

        AppConfig {
            log_level: self.log_level.clone(),
            gpio,
            gate,
            audio,
            sounds: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["gate-button"]).unwrap();
        assert!(cli.overrides.pin.is_none());
        assert!(cli.overrides.url.is_none());
        assert!(!cli.simulate);
        assert!(cli.command.is_none());
        assert_eq!(cli.overrides.to_config(), AppConfig::empty());
    }

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "gate-button",
            "--pin",
            "17",
            "--url",
            "http://10.0.0.2/open",
            "--timeout",
            "500ms",
            "--player",
            "rodio",
        ])
        .unwrap();

        let config = cli.overrides.to_config();
        assert_eq!(config.pin_or_default(), 17);
        assert_eq!(config.gate_url_or_default(), "http://10.0.0.2/open");
        assert_eq!(config.gate_timeout(), Some("500ms"));
        assert_eq!(config.player_or_default(), "rodio");
        assert!(config.debounce().is_none());
    }

    #[test]
    fn cli_parses_simulate() {
        let cli = Cli::try_parse_from(["gate-button", "--simulate"]).unwrap();
        assert!(cli.simulate);
    }

    #[test]
    fn cli_parses_config_show() {
        let cli = Cli::try_parse_from(["gate-button", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn overrides_apply_after_subcommand() {
        let cli = Cli::try_parse_from(["gate-button", "trigger", "--url", "http://gate/x"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Trigger)));
        assert_eq!(cli.overrides.url.as_deref(), Some("http://gate/x"));
    }

    #[test]
    fn rejects_non_numeric_pin() {
        assert!(Cli::try_parse_from(["gate-button", "--pin", "four"]).is_err());
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
