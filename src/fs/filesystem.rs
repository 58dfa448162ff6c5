//! FileSystem trait definition

use std::io;
use std::path::Path;

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create a directory and all of its missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write a file, replacing any existing content
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}
