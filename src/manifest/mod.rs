//! Typed model of `asconfig.json`.
//!
//! The manifest is parsed once, as relaxed JSON (comments, trailing commas,
//! unquoted keys), into [`Manifest`]. Every field is optional; an absent
//! manifest and an empty one behave the same everywhere downstream. Keys the
//! resolver does not use are ignored.

mod loader;

pub use loader::{load_manifest, locate_manifest, LoadedManifest, MANIFEST_FILE_NAME};

use crate::platform::PlatformKey;
use serde::Deserialize;

/// How the compiled SWF is meant to run, from the `config` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum PackagingMode {
    /// Any other `config` value (`flex`, `royale`, ...) or none at all
    #[default]
    Bare,
    /// `"air"`: desktop AIR application
    Air,
    /// `"airmobile"`: mobile AIR application
    AirMobile,
}

impl PackagingMode {
    pub fn requires_wrapper(self) -> bool {
        matches!(self, PackagingMode::Air | PackagingMode::AirMobile)
    }

    pub fn is_mobile(self) -> bool {
        self == PackagingMode::AirMobile
    }
}

impl From<String> for PackagingMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "air" => PackagingMode::Air,
            "airmobile" => PackagingMode::AirMobile,
            _ => PackagingMode::Bare,
        }
    }
}

/// The `application` field: one descriptor, or one per platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DescriptorRef {
    Path(String),
    PerPlatform(PlatformDescriptors),
}

impl DescriptorRef {
    /// The descriptor for `platform`. A single descriptor applies to every
    /// platform, including none.
    pub fn select(&self, platform: Option<PlatformKey>) -> Option<&str> {
        match self {
            DescriptorRef::Path(path) => Some(path.as_str()),
            DescriptorRef::PerPlatform(map) => platform.and_then(|p| map.get(p)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlatformDescriptors {
    pub android: Option<String>,
    pub ios: Option<String>,
    pub windows: Option<String>,
    pub mac: Option<String>,
}

impl PlatformDescriptors {
    pub fn get(&self, platform: PlatformKey) -> Option<&str> {
        let entry = match platform {
            PlatformKey::Android => &self.android,
            PlatformKey::Ios | PlatformKey::IosSimulator => &self.ios,
            PlatformKey::Windows => &self.windows,
            PlatformKey::Mac => &self.mac,
        };
        entry.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompilerOptions {
    pub output: Option<String>,
    #[serde(rename = "source-path", default)]
    pub source_path: Vec<String>,
    #[serde(rename = "library-path", default)]
    pub library_path: Vec<String>,
    #[serde(rename = "external-library-path", default)]
    pub external_library_path: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnimateOptions {
    pub file: Option<String>,
}

/// Packaging options for one platform under `airOptions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlatformPackaging {
    pub output: Option<String>,
    pub platformsdk: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AirOptions {
    /// Packaging-wide output, used when a platform section has none
    pub output: Option<String>,
    pub android: Option<PlatformPackaging>,
    pub ios: Option<PlatformPackaging>,
    pub ios_simulator: Option<PlatformPackaging>,
    pub windows: Option<PlatformPackaging>,
    pub mac: Option<PlatformPackaging>,
}

impl AirOptions {
    pub fn platform(&self, platform: PlatformKey) -> Option<&PlatformPackaging> {
        let section = match platform {
            PlatformKey::Android => &self.android,
            PlatformKey::Ios => &self.ios,
            PlatformKey::IosSimulator => &self.ios_simulator,
            PlatformKey::Windows => &self.windows,
            PlatformKey::Mac => &self.mac,
        };
        section.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub config: PackagingMode,
    pub application: Option<DescriptorRef>,
    #[serde(default)]
    pub compiler_options: CompilerOptions,
    /// Source files; the last one is the entry point
    #[serde(default)]
    pub files: Vec<String>,
    pub main_class: Option<String>,
    #[serde(default)]
    pub animate_options: AnimateOptions,
    #[serde(default)]
    pub air_options: AirOptions,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self, json5::Error> {
        json5::from_str(content)
    }

    pub fn entry_file(&self) -> Option<&str> {
        self.files.last().map(String::as_str)
    }
}
