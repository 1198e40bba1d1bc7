use super::Manifest;
use crate::error::ResolveError;
use crate::fs::FileSystem;
use crate::paths;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

pub const MANIFEST_FILE_NAME: &str = "asconfig.json";

/// A manifest together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedManifest {
    pub manifest: Manifest,
    /// Absolute path of the manifest file, whether or not it exists
    pub path: PathBuf,
    /// Directory every manifest-relative path is resolved against
    pub project_root: PathBuf,
}

impl LoadedManifest {
    /// Resolve a manifest-relative path against the project root.
    pub fn resolve_path(&self, candidate: impl AsRef<Path>) -> PathBuf {
        paths::resolve(&self.project_root, candidate)
    }

    pub fn resolve_all(&self, candidates: &[String]) -> Vec<PathBuf> {
        candidates.iter().map(|c| self.resolve_path(c)).collect()
    }
}

/// Work out where the manifest lives.
///
/// An explicit path wins and is taken relative to `workspace` when it is not
/// absolute. Without one, the manifest is `asconfig.json` in the workspace.
/// With neither a workspace nor an absolute explicit path there is nothing to
/// anchor the project to.
pub fn locate_manifest(
    workspace: Option<&Path>,
    explicit: Option<&str>,
) -> Result<PathBuf, ResolveError> {
    match (workspace, explicit) {
        (_, Some(explicit)) if Path::new(explicit).is_absolute() => {
            Ok(paths::clean(Path::new(explicit)))
        }
        (Some(workspace), Some(explicit)) => Ok(paths::resolve(workspace, explicit)),
        (Some(workspace), None) => Ok(paths::resolve(workspace, MANIFEST_FILE_NAME)),
        (None, _) => Err(ResolveError::AmbiguousWorkspace),
    }
}

/// Load the manifest at `path`.
///
/// A missing file is not an error: it yields an empty manifest rooted at the
/// file's directory.
pub fn load_manifest(fs: &dyn FileSystem, path: &Path) -> Result<LoadedManifest, ResolveError> {
    let project_root = paths::parent_dir(path);

    if !fs.exists(path) {
        debug!(path = %path.display(), "no manifest found, using defaults");
        return Ok(LoadedManifest {
            manifest: Manifest::default(),
            path: path.to_path_buf(),
            project_root,
        });
    }

    let content = fs
        .read_to_string(path)
        .map_err(|source| ResolveError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

    let manifest = Manifest::parse(&content).map_err(|source| {
        error!(path = %path.display(), error = %source, "malformed manifest");
        ResolveError::ManifestParse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(path = %path.display(), config = ?manifest.config, "loaded manifest");

    Ok(LoadedManifest {
        manifest,
        path: path.to_path_buf(),
        project_root,
    })
}
