//! swf-launch - debug configuration resolution for SWF and Adobe AIR projects
//!
//! Takes a minimal debug request (often just `{"type": "swf"}`) and fills in
//! everything the debug adapter needs, using the project's `asconfig.json`
//! as the source of truth: the program to launch, whether it runs inside the
//! AIR launcher, the profile, the native extension directory, and for device
//! attach the application id, bundle and platform SDK.
//!
//! # Example Usage
//!
//! ```no_run
//! use swf_launch::{DebugConfiguration, DebugConfigurationResolver, LauncherConfig, RealFileSystem};
//! use std::path::Path;
//!
//! let config = LauncherConfig::from_env();
//! let fs = RealFileSystem::new();
//! let resolver = DebugConfigurationResolver::new(&fs, &config);
//!
//! let resolved = resolver
//!     .resolve(Some(Path::new("/path/to/project")), DebugConfiguration::launch())
//!     .expect("resolution failed");
//! println!("{}", resolved.configuration.to_json().unwrap());
//! ```
//!
//! # Project Structure
//!
//! - [`manifest`]: typed `asconfig.json` and how it is located
//! - [`resolve`]: the launch and attach cascades
//! - [`adapter`]: the debug adapter command line
//! - [`fs`]: file system abstraction with an in-memory mock

pub mod adapter;
pub mod cli;
pub mod config;
pub mod error;
pub mod extensions;
pub mod fs;
pub mod manifest;
pub mod paths;
pub mod platform;
pub mod request;
pub mod resolve;
pub mod util;

pub use adapter::{build_adapter_executable, DebugAdapterExecutable};
pub use config::{ConfigError, EnvRuntimePaths, LauncherConfig};
pub use error::{AdapterError, ResolveError};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use manifest::{LoadedManifest, Manifest};
pub use platform::{HostOs, PlatformKey};
pub use request::{initial_configurations, DebugConfiguration, RequestKind};
pub use resolve::{
    DebugConfigurationResolver, LaunchResolution, ResolvedConfiguration, RuntimePaths, RuntimePathsProvider,
};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
