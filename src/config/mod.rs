pub mod toml_config;

pub use toml_config::{ClockConfig, LogFormat, LoggingConfig, RecordsConfig};
