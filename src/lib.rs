//! Gate Button - push-button gate opener
//!
//! Watches a GPIO push button, triggers a remote gate over HTTP when it is
//! pressed, and plays feedback sounds (press, open, error) on local audio
//! output. Runs as a background service on a single-board computer.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Sound identifiers, durations, the debouncer, configuration
//! - **Application**: Sound queue and worker, gate trigger, press dispatch, ports
//! - **Infrastructure**: Adapters for GPIO, HTTP, audio players and the config file
//! - **CLI**: Argument parsing, logging, signals and the service runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
