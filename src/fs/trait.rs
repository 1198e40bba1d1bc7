//! FileSystem trait definition

use std::io;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }
}

/// The file-system queries the resolver performs.
///
/// Every call is a plain blocking operation. Errors are reported as
/// [`io::Error`] so callers can attach them as the source of a typed error.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as UTF-8
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// List the immediate children of a directory, in no particular order
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}
