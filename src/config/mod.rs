mod app_config;

pub use app_config::{AppConfig, HistoryConfig, LogFormat, LoggingConfig, ModelsConfig, ServerConfig};
