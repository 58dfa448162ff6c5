//! Docker Compose descriptor loading
//!
//! Only the parts of the compose format needed to derive a service topology
//! are modelled: service names, `container_name`, `ports` and `networks`.

pub mod loader;

pub use loader::{load_compose_file, parse_compose, ComposeFile, ComposeService, ServiceDefinition};
