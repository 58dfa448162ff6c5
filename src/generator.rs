//! End-to-end generation: load compose file, extract topology, write document

use crate::compose::load_compose_file;
use crate::error::TopologyError;
use crate::fs::FileSystem;
use crate::topology::{write_topology, TopologyDocument, TopologyExtractor};
use std::path::Path;
use tracing::debug;

pub struct TopologyGenerator<F: FileSystem> {
    fs: F,
    extractor: TopologyExtractor,
}

impl<F: FileSystem> TopologyGenerator<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            extractor: TopologyExtractor::new(),
        }
    }

    /// Generate `output` from `compose` and return the written document
    ///
    /// Nothing is written when the compose file is missing or malformed.
    pub fn generate(&self, compose: &Path, output: &Path) -> Result<TopologyDocument, TopologyError> {
        debug!(compose = %compose.display(), "Generating topology");

        let compose_file = load_compose_file(&self.fs, compose)?;
        let document = self.extractor.extract(&compose_file);
        write_topology(&self.fs, &document, output)?;

        Ok(document)
    }

    #[cfg(test)]
    fn file_system(&self) -> &F {
        &self.fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    const COMPOSE: &str = r#"
services:
  postgres:
    image: postgres:15
  exchange-okx:
    ports: ["50053:50051"]
  trading-engine-lh:
    ports: ["50056:50051", "8085:8080"]
"#;

    #[test]
    fn test_generate_writes_document() {
        let fs = MockFileSystem::new();
        fs.add_file("/srv/docker-compose.yml", COMPOSE);
        let generator = TopologyGenerator::new(fs);

        let document = generator
            .generate(
                Path::new("/srv/docker-compose.yml"),
                Path::new("/srv/config/topology.json"),
            )
            .unwrap();

        assert_eq!(document.nodes.len(), 2);
        assert_eq!(document.edges.len(), 1);
        assert!(generator
            .file_system()
            .file("/srv/config/topology.json")
            .is_some());
    }

    #[test]
    fn test_missing_compose_writes_nothing() {
        let generator = TopologyGenerator::new(MockFileSystem::new());

        let err = generator
            .generate(
                Path::new("/srv/docker-compose.yml"),
                Path::new("/srv/config/topology.json"),
            )
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(!generator.file_system().is_dir("/srv/config"));
    }

    #[test]
    fn test_parse_error_writes_nothing() {
        let fs = MockFileSystem::new();
        fs.add_file("/srv/docker-compose.yml", "services: [\n");
        let generator = TopologyGenerator::new(fs);

        let err = generator
            .generate(
                Path::new("/srv/docker-compose.yml"),
                Path::new("/srv/config/topology.json"),
            )
            .unwrap_err();

        assert!(matches!(err, TopologyError::Parse { .. }));
        assert!(generator
            .file_system()
            .file("/srv/config/topology.json")
            .is_none());
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let fs = MockFileSystem::new();
        fs.add_file("/srv/docker-compose.yml", COMPOSE);
        let generator = TopologyGenerator::new(fs);
        let compose = Path::new("/srv/docker-compose.yml");
        let output = Path::new("/srv/config/topology.json");

        generator.generate(compose, output).unwrap();
        let first = generator.file_system().file(output).unwrap();
        generator.generate(compose, output).unwrap();
        let second = generator.file_system().file(output).unwrap();

        assert_eq!(first, second);
    }
}
