//! Debug configuration resolution.
//!
//! [`DebugConfigurationResolver`] turns a minimal debug request into a fully
//! specified one, using `asconfig.json` as the source of defaults. Launch
//! and attach requests go through their own cascades in [`launch`] and
//! [`attach`].

pub mod attach;
pub mod descriptor;
pub mod launch;
pub mod rules;

pub use attach::AttachResolver;
pub use launch::{LaunchResolution, LaunchResolver};
pub use crate::request::initial_configurations;

use crate::error::ResolveError;
use crate::fs::FileSystem;
use crate::manifest::{load_manifest, locate_manifest};
use crate::platform::HostOs;
use crate::request::{DebugConfiguration, RequestKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locations of the external runtimes a debug session needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimePaths {
    pub java_path: Option<PathBuf>,
    /// Framework SDK, which provides the AIR launcher
    pub sdk_path: Option<PathBuf>,
}

/// Source of [`RuntimePaths`].
///
/// Having no SDK is normal; it only matters for AIR launches.
pub trait RuntimePathsProvider: Send + Sync {
    fn runtime_paths(&self) -> RuntimePaths;
}

impl RuntimePathsProvider for RuntimePaths {
    fn runtime_paths(&self) -> RuntimePaths {
        self.clone()
    }
}

/// A resolved configuration plus anything the user should be told about it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfiguration {
    pub configuration: DebugConfiguration,
    pub warnings: Vec<String>,
}

pub struct DebugConfigurationResolver<'a> {
    fs: &'a dyn FileSystem,
    paths_provider: &'a dyn RuntimePathsProvider,
    host_os: HostOs,
}

impl<'a> DebugConfigurationResolver<'a> {
    pub fn new(fs: &'a dyn FileSystem, paths_provider: &'a dyn RuntimePathsProvider) -> Self {
        Self {
            fs,
            paths_provider,
            host_os: HostOs::current(),
        }
    }

    pub fn with_host_os(mut self, host_os: HostOs) -> Self {
        self.host_os = host_os;
        self
    }

    /// Resolve `config` for the project in `workspace`.
    ///
    /// Runs to completion synchronously; it only reads a few small files, so
    /// no cancellation handle is taken. Fails on the first error without
    /// returning a partial configuration.
    pub fn resolve(
        &self,
        workspace: Option<&Path>,
        mut config: DebugConfiguration,
    ) -> Result<ResolvedConfiguration, ResolveError> {
        let runtime = self.paths_provider.runtime_paths();
        if runtime.java_path.is_none() {
            return Err(ResolveError::JavaNotFound);
        }

        config.apply_defaults();
        let request = config.request_kind();

        // Attaching by host and port alone needs neither workspace nor manifest.
        if request == RequestKind::Attach && config.declared_platform().is_none() {
            debug!("attach request names no platform, passing through");
            return Ok(ResolvedConfiguration {
                configuration: config,
                warnings: Vec::new(),
            });
        }

        let manifest_path = locate_manifest(workspace, config.asconfig_path.as_deref())?;
        let loaded = load_manifest(self.fs, &manifest_path)?;
        debug!(?request, manifest = %manifest_path.display(), "resolving debug configuration");

        let resolved = match request {
            RequestKind::Attach => ResolvedConfiguration {
                configuration: AttachResolver::new(self.fs).resolve(&loaded, config)?,
                warnings: Vec::new(),
            },
            RequestKind::Launch => {
                let resolution =
                    LaunchResolver::new(self.fs, self.host_os, runtime.sdk_path).resolve(&loaded, config)?;
                ResolvedConfiguration {
                    configuration: resolution.configuration,
                    warnings: resolution.warnings,
                }
            }
        };

        info!(?request, "resolved debug configuration");
        Ok(resolved)
    }
}
