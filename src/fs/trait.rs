//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
}

/// Abstraction over the project tree so migration steps can run against
/// an in-memory tree in tests
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a file, replacing any previous content. The parent directory
    /// must already exist.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Create a directory and all missing parents. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Remove a single file
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Read a file if it exists, `Ok(None)` if it does not
    fn read_optional(&self, path: &Path) -> Result<Option<String>> {
        if self.is_file(path) {
            self.read_to_string(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Create the parent directory of `path`, then write it
    fn write_with_parents(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        self.write(path, content)
    }
}
