use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub solver: SolverSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    /// Directory the workbook files are written to; created on demand.
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SolverSettings {
    #[serde(default = "default_time_limit_ms")]
    pub time_limit_ms: u64,
    #[serde(default = "default_max_memory_mb")]
    pub max_memory_mb: u64,
}

fn default_output_directory() -> String {
    "static".to_string()
}

fn default_time_limit_ms() -> u64 {
    60_000
}

fn default_max_memory_mb() -> u64 {
    2_048
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            time_limit_ms: default_time_limit_ms(),
            max_memory_mb: default_max_memory_mb(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputSettings::default(),
            solver: SolverSettings::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
