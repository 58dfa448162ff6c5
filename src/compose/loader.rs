//! Docker Compose file parsing

use crate::error::TopologyError;
use crate::fs::FileSystem;
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{debug, warn};

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level compose document as far as topology extraction cares
#[derive(Debug, Clone, Default, Deserialize)]
struct RawComposeFile {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    services: Mapping,
}

/// A single service body from the `services` mapping
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceDefinition {
    #[serde(default)]
    pub container_name: Option<String>,
    /// Port mappings; non-string entries are kept so they can be skipped later
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub ports: Vec<Value>,
    /// Either a list of network names or a mapping of name to config
    #[serde(default)]
    pub networks: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposeService {
    pub name: String,
    pub definition: ServiceDefinition,
}

/// Parsed compose file with services in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeFile {
    pub services: Vec<ComposeService>,
}

#[cfg(test)]
impl ComposeFile {
    fn service(&self, name: &str) -> Option<&ServiceDefinition> {
        self.services
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.definition)
    }
}

/// Read and parse a compose file
///
/// A missing file is reported as [`TopologyError::ComposeNotFound`] so the
/// caller can tell it apart from unreadable or malformed input.
pub fn load_compose_file<F: FileSystem>(fs: &F, path: &Path) -> Result<ComposeFile, TopologyError> {
    if !fs.exists(path) {
        return Err(TopologyError::ComposeNotFound(path.to_path_buf()));
    }

    let content = fs.read_to_string(path).map_err(|source| TopologyError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let compose = parse_compose(&content).map_err(|source| TopologyError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        services = compose.services.len(),
        "Loaded compose file"
    );
    Ok(compose)
}

/// Parse compose YAML content
///
/// An empty document or a missing `services` key yields no services.
/// Merge keys (`<<: *anchor`) are resolved before services are decoded.
pub fn parse_compose(content: &str) -> Result<ComposeFile, serde_yaml::Error> {
    let mut document: Value = serde_yaml::from_str(content)?;
    document.apply_merge()?;
    if document.is_null() {
        return Ok(ComposeFile::default());
    }

    let raw: RawComposeFile = serde_yaml::from_value(document)?;
    let mut services = Vec::with_capacity(raw.services.len());

    for (key, body) in raw.services {
        let name = match key {
            Value::String(name) => name,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                warn!(key = ?other, "Skipping service with non-scalar name");
                continue;
            }
        };

        let definition = if body.is_null() {
            ServiceDefinition::default()
        } else {
            serde_yaml::from_value(body)?
        };

        services.push(ComposeService { name, definition });
    }

    Ok(ComposeFile { services })
}
