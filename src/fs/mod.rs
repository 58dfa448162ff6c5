//! File system abstraction used by the loader and writer

mod filesystem;
mod mock;
mod real;

pub use filesystem::FileSystem;
pub use mock::MockFileSystem;
pub use real::RealFileSystem;
