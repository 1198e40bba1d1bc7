//! Path helpers shared by the manifest loader and the resolvers.
//!
//! Every manifest-derived path goes through [`resolve`] before it is written
//! into a resolved configuration, so downstream consumers never see a path
//! that is relative to the manifest.

use std::path::{Component, Path, PathBuf};

/// Resolve `candidate` against `base`.
///
/// Absolute candidates are returned as-is (cleaned). The result is lexically
/// normalized: `.` components are dropped and `..` pops the previous
/// component. The file system is never consulted, so symlinks are not
/// followed.
pub fn resolve(base: &Path, candidate: impl AsRef<Path>) -> PathBuf {
    let candidate = candidate.as_ref();
    if candidate.is_absolute() {
        clean(candidate)
    } else {
        clean(&base.join(candidate))
    }
}

/// Lexically normalize a path.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Whether the path text ends with `extension` (e.g. `".xml"`).
///
/// This is a plain suffix check on the full path, so `"app.XML"` does not
/// match `".xml"`.
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    path.as_ref().to_string_lossy().ends_with(extension)
}

/// Replace the last extension of the file name (if any) with `extension`.
///
/// `extension` includes its leading dot, e.g. `".swf"`.
pub fn replace_extension(path: &Path, extension: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!("{}{}", stem, extension))
}

/// Cut a file name at its first `.`, so `"App.debug.swf"` becomes `"App"`.
pub fn strip_all_extensions(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(index) => &file_name[..index],
        None => file_name,
    }
}

/// File name of `path` as a string, or an empty string.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Parent directory of `path`, or an empty path for bare file names.
pub fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}
