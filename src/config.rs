//! Configuration for topology generation
//!
//! Settings are read from environment variables with defaults that match a
//! plain invocation from the orchestrator directory. Command-line flags
//! override the environment.
//!
//! # Environment Variables
//!
//! - `TOPOLOGY_BASE_DIR`: Directory holding `docker-compose.yml` - default: current directory
//! - `TOPOLOGY_COMPOSE_FILE`: Explicit compose file path - default: `<base>/docker-compose.yml`
//! - `TOPOLOGY_OUTPUT_FILE`: Explicit output path - default: `<base>/config/topology.json`
//! - `TOPOLOGY_LOG_LEVEL`: Logging level - default: "info"
//! - `TOPOLOGY_LOG_JSON`: Emit JSON logs (true|false) - default: "false"

use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const COMPOSE_FILE_NAME: &str = "docker-compose.yml";
pub const OUTPUT_DIR_NAME: &str = "config";
pub const OUTPUT_FILE_NAME: &str = "topology.json";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Directory the default compose and output paths are resolved against
    pub base_dir: PathBuf,
    pub compose_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for GeneratorConfig {
    /// Loads configuration from `TOPOLOGY_*` environment variables
    fn default() -> Self {
        let base_dir = env::var("TOPOLOGY_BASE_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let compose_file = env::var("TOPOLOGY_COMPOSE_FILE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let output_file = env::var("TOPOLOGY_OUTPUT_FILE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_level = env::var("TOPOLOGY_LOG_LEVEL")
            .map(|s| s.to_lowercase())
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let log_json = env::var("TOPOLOGY_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            base_dir,
            compose_file,
            output_file,
            log_level,
            log_json,
        }
    }
}

impl GeneratorConfig {
    /// Configuration rooted at `base_dir`, ignoring the environment
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            compose_file: None,
            output_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }

    pub fn compose_path(&self) -> PathBuf {
        self.compose_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join(COMPOSE_FILE_NAME))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join(OUTPUT_DIR_NAME).join(OUTPUT_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.compose_path() == self.output_path() {
            return Err(ConfigError::ValidationFailed(format!(
                "Output path {} would overwrite the compose file",
                self.output_path().display()
            )));
        }

        Ok(())
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Topology Generator Configuration:")?;
        writeln!(f, "  Compose File: {}", self.compose_path().display())?;
        writeln!(f, "  Output File: {}", self.output_path().display())?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  JSON Logs: {}", self.log_json)?;
        Ok(())
    }
}
