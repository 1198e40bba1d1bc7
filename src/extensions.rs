//! Discovery of native extension archives (`.ane`) on the library paths.

use crate::fs::FileSystem;
use crate::paths;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

pub const FILE_EXTENSION_ANE: &str = ".ane";

/// Directory, next to the program, where the build unpacks native extensions.
pub const UNPACKAGED_ANES_DIR: &str = ".as3mxml-unpackaged-anes";

/// A library directory could not be listed.
#[derive(Debug, Error)]
#[error("failed to list {}", .path.display())]
pub struct ScanError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Collect the native extension archives named by `entries`.
///
/// Each entry is resolved against `project_root`. An entry ending in `.ane`
/// is kept as-is, whether or not it exists. A directory contributes its
/// immediate `.ane` children in file-name order; it is not searched
/// recursively. Anything else is skipped. Entry order is preserved and
/// duplicates are kept.
pub fn scan_native_extensions<S: AsRef<str>>(
    fs: &dyn FileSystem,
    project_root: &Path,
    entries: &[S],
) -> Result<Vec<PathBuf>, ScanError> {
    let mut archives = Vec::new();

    for entry in entries {
        let path = paths::resolve(project_root, entry.as_ref());

        if paths::has_extension(&path, FILE_EXTENSION_ANE) {
            archives.push(path);
        } else if fs.is_dir(&path) {
            let mut children: Vec<_> = fs
                .read_dir(&path)
                .map_err(|source| ScanError {
                    path: path.clone(),
                    source,
                })?
                .into_iter()
                .filter(|child| child.file_name().ends_with(FILE_EXTENSION_ANE))
                .collect();
            children.sort_by(|a, b| a.file_name().cmp(b.file_name()));

            trace!(dir = %path.display(), count = children.len(), "scanned library directory");
            archives.extend(children.into_iter().map(|child| path.join(child.file_name())));
        }
    }

    Ok(archives)
}

/// Where unpacked extensions for `program` would live.
pub fn unpackaged_dir_for(program_dir: &Path) -> PathBuf {
    program_dir.join(UNPACKAGED_ANES_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_directory_then_archive() {
        let fs = MockFileSystem::new();
        fs.add_file("libs/a.ane", "");
        fs.add_file("libs/b.txt", "");

        let found = scan_native_extensions(&fs, Path::new("/project"), &["libs/", "ext.ane"]).unwrap();

        assert_eq!(
            found,
            vec![
                PathBuf::from("/project/libs/a.ane"),
                PathBuf::from("/project/ext.ane")
            ]
        );
    }

    #[test]
    fn test_children_sorted_and_not_recursive() {
        let fs = MockFileSystem::new();
        fs.add_file("libs/z.ane", "");
        fs.add_file("libs/m.ane", "");
        fs.add_file("libs/sub/deep.ane", "");

        let found = scan_native_extensions(&fs, Path::new("/project"), &["libs"]).unwrap();

        assert_eq!(
            found,
            vec![
                PathBuf::from("/project/libs/m.ane"),
                PathBuf::from("/project/libs/z.ane")
            ]
        );
    }

    #[test]
    fn test_duplicates_and_missing_entries() {
        let fs = MockFileSystem::new();
        fs.add_file("libs/a.ane", "");

        let found = scan_native_extensions(
            &fs,
            Path::new("/project"),
            &["libs", "/abs/libs/a.ane", "libs", "missing-dir", "lib.swc"],
        )
        .unwrap();

        assert_eq!(
            found,
            vec![
                PathBuf::from("/project/libs/a.ane"),
                PathBuf::from("/abs/libs/a.ane"),
                PathBuf::from("/project/libs/a.ane"),
            ]
        );
    }

    #[test]
    fn test_unreadable_directory_fails() {
        let fs = MockFileSystem::new();
        fs.add_dir("libs");
        fs.deny_read("libs");

        let err = scan_native_extensions(&fs, Path::new("/project"), &["libs"]).unwrap_err();
        assert_eq!(err.path, PathBuf::from("/project/libs"));
        assert_eq!(err.source.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_empty_entries() {
        let fs = MockFileSystem::new();
        let entries: [&str; 0] = [];
        assert!(scan_native_extensions(&fs, Path::new("/project"), &entries)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unpackaged_dir_for() {
        assert_eq!(
            unpackaged_dir_for(Path::new("/project/bin")),
            PathBuf::from("/project/bin/.as3mxml-unpackaged-anes")
        );
    }
}
