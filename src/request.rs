//! The `swf` debug configuration, as written in `launch.json` and as handed
//! to the debug adapter once resolved.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const DEBUG_TYPE: &str = "swf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Launch,
    Attach,
}

/// A debug request.
///
/// Users usually fill in a handful of fields; resolution fills in the rest.
/// Fields this crate does not know about (`noDebug`, `env`, `preLaunchTask`,
/// ...) are carried through untouched. Unset fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugConfiguration {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screensize: Option<String>,
    #[serde(rename = "screenDPI", default, skip_serializing_if = "Option::is_none")]
    pub screen_dpi: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(rename = "versionPlatform", default, skip_serializing_if = "Option::is_none")]
    pub version_platform: Option<String>,
    #[serde(rename = "runtimeExecutable", default, skip_serializing_if = "Option::is_none")]
    pub runtime_executable: Option<PathBuf>,
    #[serde(rename = "runtimeArgs", default, skip_serializing_if = "Option::is_none")]
    pub runtime_args: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extdir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<PathBuf>,
    #[serde(rename = "applicationID", default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platformsdk: Option<PathBuf>,

    /// Manifest location, for requests not tied to a single workspace folder
    #[serde(rename = "asconfigPath", default, skip_serializing_if = "Option::is_none")]
    pub asconfig_path: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DebugConfiguration {
    pub fn launch() -> Self {
        Self {
            kind: Some(DEBUG_TYPE.to_string()),
            request: Some(RequestKind::Launch),
            ..Default::default()
        }
    }

    pub fn attach() -> Self {
        Self {
            kind: Some(DEBUG_TYPE.to_string()),
            request: Some(RequestKind::Attach),
            ..Default::default()
        }
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Missing `type` and `request` default to `swf` and `launch`.
    ///
    /// Attach is an advanced option that users configure explicitly.
    pub fn apply_defaults(&mut self) {
        if non_empty(&self.kind).is_none() {
            self.kind = Some(DEBUG_TYPE.to_string());
        }
        if self.request.is_none() {
            self.request = Some(RequestKind::Launch);
        }
    }

    pub fn request_kind(&self) -> RequestKind {
        self.request.unwrap_or(RequestKind::Launch)
    }

    /// The declared program, ignoring an empty string.
    pub fn declared_program(&self) -> Option<&Path> {
        non_empty_path(&self.program)
    }

    pub fn declared_extdir(&self) -> Option<&Path> {
        non_empty_path(&self.extdir)
    }

    pub fn declared_runtime_executable(&self) -> Option<&Path> {
        non_empty_path(&self.runtime_executable)
    }

    pub fn declared_bundle(&self) -> Option<&Path> {
        non_empty_path(&self.bundle)
    }

    pub fn declared_platformsdk(&self) -> Option<&Path> {
        non_empty_path(&self.platformsdk)
    }

    pub fn declared_profile(&self) -> Option<&str> {
        non_empty(&self.profile)
    }

    pub fn declared_application_id(&self) -> Option<&str> {
        non_empty(&self.application_id)
    }

    pub fn declared_platform(&self) -> Option<&str> {
        non_empty(&self.platform)
    }

    pub fn declared_version_platform(&self) -> Option<&str> {
        non_empty(&self.version_platform)
    }

    /// Whether any field that only the AIR launcher understands is present.
    ///
    /// Presence is what counts, so an empty `profile` still means AIR.
    pub fn has_wrapper_fields(&self) -> bool {
        self.profile.is_some()
            || self.screensize.is_some()
            || self.screen_dpi.is_some()
            || self.version_platform.is_some()
            || self.extdir.is_some()
            || self.args.is_some()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn non_empty_path(value: &Option<PathBuf>) -> Option<&Path> {
    value.as_deref().filter(|p| !p.as_os_str().is_empty())
}

/// Configurations offered when a workspace has no `launch.json` yet.
///
/// A bare launch request is enough; everything else is resolved from
/// `asconfig.json`.
pub fn initial_configurations(workspace: Option<&Path>) -> Vec<DebugConfiguration> {
    if workspace.is_none() {
        return Vec::new();
    }
    vec![DebugConfiguration {
        name: Some("Launch SWF".to_string()),
        ..DebugConfiguration::launch()
    }]
}
