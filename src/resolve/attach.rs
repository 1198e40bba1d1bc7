//! Attach request resolution.
//!
//! An attach request with a `platform` targets an app installed on a device.
//! It needs the app's identifier and the packaged bundle; both are looked up
//! in the manifest when not declared.

use super::descriptor::read_application_id;
use super::rules::{first_match, Rule};
use crate::error::ResolveError;
use crate::fs::FileSystem;
use crate::manifest::LoadedManifest;
use crate::platform::PlatformKey;
use crate::request::DebugConfiguration;
use std::path::PathBuf;
use tracing::debug;

/// Packaging outputs that could be the bundle, already resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleFacts {
    pub platform_output: Option<PathBuf>,
    pub shared_output: Option<PathBuf>,
}

fn has_platform_output(f: &BundleFacts) -> bool {
    f.platform_output.is_some()
}

fn platform_output(f: &BundleFacts) -> Option<PathBuf> {
    f.platform_output.clone()
}

fn has_shared_output(f: &BundleFacts) -> bool {
    f.shared_output.is_some()
}

fn shared_output(f: &BundleFacts) -> Option<PathBuf> {
    f.shared_output.clone()
}

pub const BUNDLE_RULES: &[Rule<BundleFacts>] = &[
    Rule {
        name: "platform packaging output",
        applies: has_platform_output,
        derive: platform_output,
    },
    Rule {
        name: "packaging output",
        applies: has_shared_output,
        derive: shared_output,
    },
];

pub struct AttachResolver<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> AttachResolver<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    pub fn resolve(
        &self,
        loaded: &LoadedManifest,
        mut config: DebugConfiguration,
    ) -> Result<DebugConfiguration, ResolveError> {
        let platform_name = match config.declared_platform() {
            Some(name) => name.to_string(),
            None => return Ok(config),
        };
        let platform = PlatformKey::from_attach_platform(&platform_name);
        let manifest = &loaded.manifest;

        if config.declared_application_id().is_none() {
            let descriptor = manifest
                .application
                .as_ref()
                .and_then(|application| application.select(platform))
                .map(|path| loaded.resolve_path(path));

            if let Some(descriptor) = descriptor {
                let id = read_application_id(self.fs, &descriptor)?;
                debug!(descriptor = %descriptor.display(), id = ?id, "read application id");
                if id.is_some() {
                    config.application_id = id;
                }
            }
        }

        let packaging = platform.and_then(|key| manifest.air_options.platform(key));

        if config.declared_bundle().is_none() {
            let facts = BundleFacts {
                platform_output: packaging
                    .and_then(|p| p.output.as_deref())
                    .map(|p| loaded.resolve_path(p)),
                shared_output: manifest
                    .air_options
                    .output
                    .as_deref()
                    .map(|p| loaded.resolve_path(p)),
            };
            if let Some(bundle) = first_match(BUNDLE_RULES, &facts).and_then(|d| d.path) {
                config.bundle = Some(bundle);
            }
        }

        if config.declared_platformsdk().is_none() {
            if let Some(sdk) = packaging.and_then(|p| p.platformsdk.as_deref()) {
                config.platformsdk = Some(loaded.resolve_path(sdk));
            }
        }

        if config.declared_application_id().is_none() {
            return Err(ResolveError::MissingApplicationId {
                platform: platform_name,
            });
        }
        if config.declared_bundle().is_none() {
            return Err(ResolveError::MissingBundle {
                platform: platform_name,
            });
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::manifest::load_manifest;
    use std::path::Path;

    const ANDROID_DESCRIPTOR: &str = "<application><id>com.example.App</id></application>";

    fn resolve(fs: &MockFileSystem, manifest: &str, config: DebugConfiguration) -> Result<DebugConfiguration, ResolveError> {
        fs.add_file("asconfig.json", manifest);
        let loaded = load_manifest(fs, Path::new("/project/asconfig.json")).unwrap();
        AttachResolver::new(fs).resolve(&loaded, config)
    }

    fn attach_to(platform: &str) -> DebugConfiguration {
        DebugConfiguration {
            platform: Some(platform.to_string()),
            ..DebugConfiguration::attach()
        }
    }

    #[test]
    fn test_without_platform_passes_through() {
        let fs = MockFileSystem::new();
        let config = DebugConfiguration {
            port: Some(7936),
            ..DebugConfiguration::attach()
        };
        let resolved = resolve(&fs, "{}", config.clone()).unwrap();
        assert_eq!(resolved, config);
    }

    #[test]
    fn test_android_from_manifest() {
        let fs = MockFileSystem::new();
        fs.add_file("app-android.xml", ANDROID_DESCRIPTOR);

        let resolved = resolve(
            &fs,
            r#"{
                "application": {"android": "app-android.xml"},
                "airOptions": {"android": {"output": "bin/App.apk", "platformsdk": "../android-sdk"}}
            }"#,
            attach_to("AND"),
        )
        .unwrap();

        assert_eq!(resolved.application_id.as_deref(), Some("com.example.App"));
        assert_eq!(resolved.bundle, Some(PathBuf::from("/project/bin/App.apk")));
        assert_eq!(resolved.platformsdk, Some(PathBuf::from("/android-sdk")));
    }

    #[test]
    fn test_single_descriptor_and_shared_output() {
        let fs = MockFileSystem::new();
        fs.add_file("src/Main-app.xml", "<id>com.example.Shared</id>");

        let resolved = resolve(
            &fs,
            r#"{"application": "src/Main-app.xml", "airOptions": {"output": "bin/App.ipa"}}"#,
            attach_to("ios"),
        )
        .unwrap();

        assert_eq!(resolved.application_id.as_deref(), Some("com.example.Shared"));
        assert_eq!(resolved.bundle, Some(PathBuf::from("/project/bin/App.ipa")));
        assert_eq!(resolved.platformsdk, None);
    }

    #[test]
    fn test_simulator_uses_ios_descriptor_and_own_packaging() {
        let fs = MockFileSystem::new();
        fs.add_file("ios-app.xml", "<id>com.example.Sim</id>");

        let resolved = resolve(
            &fs,
            r#"{
                "application": {"ios": "ios-app.xml"},
                "airOptions": {
                    "ios": {"output": "bin/Device.ipa"},
                    "ios_simulator": {"output": "bin/Sim.ipa", "platformsdk": "/sdks/iPhoneSimulator.sdk"}
                }
            }"#,
            attach_to("ios_simulator"),
        )
        .unwrap();

        assert_eq!(resolved.application_id.as_deref(), Some("com.example.Sim"));
        assert_eq!(resolved.bundle, Some(PathBuf::from("/project/bin/Sim.ipa")));
        assert_eq!(
            resolved.platformsdk,
            Some(PathBuf::from("/sdks/iPhoneSimulator.sdk"))
        );
    }

    #[test]
    fn test_declared_fields_are_kept() {
        let fs = MockFileSystem::new();
        let config = DebugConfiguration {
            application_id: Some("com.example.Declared".to_string()),
            bundle: Some(PathBuf::from("dist/App.apk")),
            platformsdk: Some(PathBuf::from("/declared/sdk")),
            ..attach_to("android")
        };

        let resolved = resolve(
            &fs,
            r#"{
                "application": {"android": "missing.xml"},
                "airOptions": {"android": {"output": "bin/App.apk", "platformsdk": "/manifest/sdk"}}
            }"#,
            config,
        )
        .unwrap();

        assert_eq!(resolved.application_id.as_deref(), Some("com.example.Declared"));
        assert_eq!(resolved.bundle, Some(PathBuf::from("dist/App.apk")));
        assert_eq!(resolved.platformsdk, Some(PathBuf::from("/declared/sdk")));
    }

    #[test]
    fn test_missing_bundle() {
        let fs = MockFileSystem::new();
        fs.add_file("app-android.xml", ANDROID_DESCRIPTOR);

        let err = resolve(&fs, r#"{"application": {"android": "app-android.xml"}}"#, attach_to("AND")).unwrap_err();

        match err {
            ResolveError::MissingBundle { platform } => assert_eq!(platform, "AND"),
            other => panic!("Expected MissingBundle, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_application_id() {
        let fs = MockFileSystem::new();
        fs.add_file("app-android.xml", "<application><id></id></application>");

        let err = resolve(
            &fs,
            r#"{"application": {"android": "app-android.xml"}, "airOptions": {"output": "bin/App.apk"}}"#,
            attach_to("android"),
        )
        .unwrap_err();

        assert!(matches!(err, ResolveError::MissingApplicationId { .. }));
    }

    #[test]
    fn test_unknown_platform_selects_nothing() {
        let fs = MockFileSystem::new();
        let err = resolve(
            &fs,
            r#"{"application": {"android": "app-android.xml"}, "airOptions": {"output": "bin/App.apk"}}"#,
            attach_to("blackberry"),
        )
        .unwrap_err();

        match err {
            ResolveError::MissingApplicationId { platform } => assert_eq!(platform, "blackberry"),
            other => panic!("Expected MissingApplicationId, got {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_descriptor_is_fatal() {
        let fs = MockFileSystem::new();
        let err = resolve(
            &fs,
            r#"{"application": {"android": "missing-app.xml"}, "airOptions": {"output": "bin/App.apk"}}"#,
            attach_to("AND"),
        )
        .unwrap_err();

        assert!(matches!(err, ResolveError::DescriptorRead { .. }));
    }

    #[test]
    fn test_platform_output_before_shared_output() {
        let facts = BundleFacts {
            platform_output: Some(PathBuf::from("/project/bin/App.apk")),
            shared_output: Some(PathBuf::from("/project/bin/App.air")),
        };
        let decision = first_match(BUNDLE_RULES, &facts).unwrap();
        assert_eq!(decision.rule, "platform packaging output");
        assert_eq!(decision.path, Some(PathBuf::from("/project/bin/App.apk")));
    }
}
