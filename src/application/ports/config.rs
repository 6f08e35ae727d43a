//! Configuration file port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the on-disk configuration layer
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the file layer. A missing file yields an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Write a config file populated with defaults.
    /// Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Location of the configuration file
    fn path(&self) -> PathBuf;

    /// Whether the configuration file exists
    fn exists(&self) -> bool;
}
