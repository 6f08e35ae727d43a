//! Log output setup

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::domain::error::ConfigError;

/// Build the log filter: `RUST_LOG` when set, otherwise the configured level
pub fn log_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| ConfigError::ValidationError {
        key: "log_level".to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber: timestamp, level and message on stderr.
/// Colors only when stderr is a terminal, so journald gets plain lines.
pub fn init_logging(level: &str) -> Result<(), ConfigError> {
    let filter = log_filter(level)?;
    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_levels_and_directives() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(log_filter("info").is_ok());
        assert!(log_filter("gate_button=debug,reqwest=warn").is_ok());
    }

    #[test]
    fn rejects_garbage_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = log_filter("gate_button=loud").unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }
}
