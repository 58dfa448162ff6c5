//! Error types for topology generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a compose file or writing the topology document
#[derive(Debug, Error)]
pub enum TopologyError {
    /// The deployment descriptor does not exist
    #[error("{} not found", .0.display())]
    ComposeNotFound(PathBuf),

    /// The deployment descriptor exists but could not be read
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The deployment descriptor is not well-formed YAML
    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The topology document could not be serialized
    #[error("Failed to serialize topology document")]
    Serialize(#[from] serde_json::Error),

    /// The output directory could not be created
    #[error("Failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The topology document could not be written
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TopologyError {
    /// True when the failure is a missing deployment descriptor
    pub fn is_not_found(&self) -> bool {
        matches!(self, TopologyError::ComposeNotFound(_))
    }
}
