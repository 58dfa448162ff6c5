//! compose-topology - service topology generation from docker-compose
//!
//! Reads a `docker-compose.yml`, keeps the trading ecosystem application
//! services, infers each service's type, category and endpoints, adds the
//! known relationships between deployed services and writes the result as
//! `config/topology.json` for the audit correlator to load at startup.
//!
//! # Example Usage
//!
//! ```no_run
//! use compose_topology::{RealFileSystem, TopologyGenerator};
//! use std::path::Path;
//!
//! let generator = TopologyGenerator::new(RealFileSystem);
//! let document = generator.generate(
//!     Path::new("docker-compose.yml"),
//!     Path::new("config/topology.json"),
//! )?;
//! println!("{} nodes, {} edges", document.nodes.len(), document.edges.len());
//! # Ok::<(), compose_topology::TopologyError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`compose`]: compose file loading
//! - [`topology`]: topology model, extraction and writing
//! - [`generator`]: load, extract and write in one call
//! - [`cli`]: command-line handling and console summary

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod fs;
pub mod generator;
pub mod topology;
pub mod util;

pub use compose::{load_compose_file, ComposeFile};
pub use config::{ConfigError, GeneratorConfig};
pub use error::TopologyError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use generator::TopologyGenerator;
pub use topology::{TopologyDocument, TopologyExtractor};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
