//! Configuration file adapters

mod toml_store;

pub use toml_store::TomlConfigStore;
