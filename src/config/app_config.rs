use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub models: ModelsConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where model artifacts live, relative to the working directory unless
/// absolute paths are configured.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsConfig {
    pub car_price_dir: String,
    pub placement_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Capacity of the process-scoped prediction history ring.
    pub capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            car_price_dir: "models/car_price".to_string(),
            placement_dir: "models/placement".to_string(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 20 }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
