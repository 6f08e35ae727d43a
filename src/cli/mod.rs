//! CLI layer - Command-line interface
//!
//! Contains argument parsing, log setup, signal handling, output
//! formatting and the service and trigger runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod service_app;
pub mod signals;

// Re-export commonly used types
pub use app::{
    config_store, load_merged_config, run_trigger_once, EXIT_ERROR, EXIT_SUCCESS,
    EXIT_USAGE_ERROR,
};
pub use args::{Cli, Commands, ConfigAction, Overrides};
pub use config_cmd::handle_config_command;
pub use logging::init_logging;
pub use presenter::Presenter;
pub use service_app::{run_service, watch_button, ServiceError};
