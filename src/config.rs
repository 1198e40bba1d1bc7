//! Environment-driven launcher settings.
//!
//! # Environment Variables
//!
//! - `SWF_LAUNCH_JAVA_PATH`: Java executable that runs the debug adapter.
//!   Falls back to `$JAVA_HOME/bin/java`, then to `java` on the `PATH`.
//! - `SWF_LAUNCH_SDK_PATH`: Framework SDK (Apache Flex, Royale or the AIR
//!   SDK). Required for AIR launches unless the request names a
//!   `runtimeExecutable`.
//! - `SWF_LAUNCH_EXTENSION_PATH`: Install directory of the editor extension
//!   that bundles the debug adapter.
//! - `SWF_LAUNCH_LOG_LEVEL`: Logging level - default: "warn"
//! - `SWF_LAUNCH_LOG_JSON`: `true` switches stderr logging to JSON lines with
//!   source locations
//!
//! # Example
//!
//! ```no_run
//! use swf_launch::LauncherConfig;
//!
//! let config = LauncherConfig::from_env();
//! config.validate().expect("Invalid configuration");
//! let paths = config.runtime_paths();
//! ```

use crate::resolve::{RuntimePaths, RuntimePathsProvider};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_JAVA_PATH: &str = "SWF_LAUNCH_JAVA_PATH";
pub const ENV_SDK_PATH: &str = "SWF_LAUNCH_SDK_PATH";
pub const ENV_EXTENSION_PATH: &str = "SWF_LAUNCH_EXTENSION_PATH";
pub const ENV_LOG_LEVEL: &str = "SWF_LAUNCH_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "SWF_LAUNCH_LOG_JSON";
pub const ENV_JAVA_HOME: &str = "JAVA_HOME";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Extension path not set. Pass --extension-path or set SWF_LAUNCH_EXTENSION_PATH")]
    MissingExtensionPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub java_path: Option<PathBuf>,
    pub sdk_path: Option<PathBuf>,
    pub extension_path: Option<PathBuf>,
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            java_path: None,
            sdk_path: None,
            extension_path: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LauncherConfig {
    /// Read settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let java_path = env_path(ENV_JAVA_PATH).or_else(find_java);
        let sdk_path = env_path(ENV_SDK_PATH);
        let extension_path = env_path(ENV_EXTENSION_PATH);

        let log_level = env::var(ENV_LOG_LEVEL)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            java_path,
            sdk_path,
            extension_path,
            log_level,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if let Some(sdk) = &self.sdk_path {
            if !sdk.is_absolute() {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} must be an absolute path, got {}",
                    ENV_SDK_PATH,
                    sdk.display()
                )));
            }
        }

        Ok(())
    }

    pub fn runtime_paths(&self) -> RuntimePaths {
        RuntimePaths {
            java_path: self.java_path.clone(),
            sdk_path: self.sdk_path.clone(),
        }
    }

    pub fn require_extension_path(&self) -> Result<&Path, ConfigError> {
        self.extension_path
            .as_deref()
            .ok_or(ConfigError::MissingExtensionPath)
    }
}

impl fmt::Display for LauncherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(path: &Option<PathBuf>) -> String {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        }

        writeln!(f, "Launcher Configuration:")?;
        writeln!(f, "  Java: {}", show(&self.java_path))?;
        writeln!(f, "  SDK: {}", show(&self.sdk_path))?;
        writeln!(f, "  Extension: {}", show(&self.extension_path))?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

/// Runtime paths read from the environment on every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvRuntimePaths;

impl RuntimePathsProvider for EnvRuntimePaths {
    fn runtime_paths(&self) -> RuntimePaths {
        LauncherConfig::from_env().runtime_paths()
    }
}

impl RuntimePathsProvider for LauncherConfig {
    fn runtime_paths(&self) -> RuntimePaths {
        LauncherConfig::runtime_paths(self)
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn find_java() -> Option<PathBuf> {
    let executable = if cfg!(windows) { "java.exe" } else { "java" };

    if let Some(home) = env_path(ENV_JAVA_HOME) {
        let candidate = home.join("bin").join(executable);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    which::which("java").ok()
}
