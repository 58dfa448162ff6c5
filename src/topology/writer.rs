//! Writes the topology document to disk

use super::schema::TopologyDocument;
use crate::error::TopologyError;
use crate::fs::FileSystem;
use std::path::Path;
use tracing::debug;

/// Render the document as indented JSON
pub fn render_topology(document: &TopologyDocument) -> Result<String, TopologyError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write the document to `path`, creating its parent directory if needed
///
/// The document is rendered before anything touches the disk, so a
/// serialization failure leaves no partial output behind. An existing file
/// is replaced.
pub fn write_topology<F: FileSystem>(
    fs: &F,
    document: &TopologyDocument,
    path: &Path,
) -> Result<(), TopologyError> {
    let rendered = render_topology(document)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)
            .map_err(|source| TopologyError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        debug!(dir = %parent.display(), "Ensured output directory");
    }

    fs.write(path, &rendered)
        .map_err(|source| TopologyError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = rendered.len(), "Wrote topology document");
    Ok(())
}
