//! End-to-end resolution against projects on disk.

use std::fs;
use std::path::{Path, PathBuf};
use swf_launch::{
    DebugConfiguration, DebugConfigurationResolver, HostOs, RealFileSystem, ResolveError, RuntimePaths,
};
use tempfile::TempDir;
use yare::parameterized;

fn runtime() -> RuntimePaths {
    RuntimePaths {
        java_path: Some(PathBuf::from("/usr/bin/java")),
        sdk_path: Some(PathBuf::from("/opt/air-sdk")),
    }
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directory");
    }
    fs::write(path, content).expect("Failed to write file");
}

fn resolve(root: &Path, request: &str) -> Result<swf_launch::ResolvedConfiguration, ResolveError> {
    let fs = RealFileSystem::new();
    let paths = runtime();
    let request = DebugConfiguration::from_json(request).expect("Invalid request JSON");
    DebugConfigurationResolver::new(&fs, &paths)
        .with_host_os(HostOs::Other)
        .resolve(Some(root), request)
}

#[parameterized(
    files_only = { r#"{"files": ["src/Main.as"]}"#, "src/Main.swf" },
    output = { r#"{"compilerOptions": {"output": "bin/Game.swf"}, "files": ["src/Main.as"]}"#, "bin/Game.swf" },
    descriptor = { r#"{"application": "app.xml", "compilerOptions": {"output": "bin/App.swf"}}"#, "bin/app.xml" },
    generated_descriptor = { r#"{"config": "air", "files": ["src/Main.as"]}"#, "src/Main-app.xml" },
    animate = { r#"{"animateOptions": {"file": "art/Movie.fla"}}"#, "art/Movie.swf" },
)]
fn test_program_derivation(manifest: &str, expected: &str) {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "asconfig.json", manifest);

    let resolved = resolve(dir.path(), r#"{"type": "swf"}"#).unwrap();

    assert_eq!(resolved.configuration.program, Some(dir.path().join(expected)));
}

#[test]
fn test_relaxed_json_manifest() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "asconfig.json",
        r#"{
            // mobile build
            config: "airmobile",
            application: "src/Main-app.xml",
            compilerOptions: {
                output: "bin/Main.swf",
            },
        }"#,
    );

    let resolved = resolve(dir.path(), "{}").unwrap();

    assert_eq!(
        resolved.configuration.program,
        Some(dir.path().join("bin/Main-app.xml"))
    );
    assert_eq!(resolved.configuration.profile.as_deref(), Some("mobileDevice"));
}

#[test]
fn test_native_extensions_on_disk() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "asconfig.json",
        r#"{"config": "air", "compilerOptions": {"output": "bin/App.swf", "library-path": ["libs/"]}, "files": ["src/App.as"]}"#,
    );
    write(dir.path(), "libs/Vibration.ane", "");
    write(dir.path(), "libs/readme.txt", "");
    fs::create_dir_all(dir.path().join("bin/.as3mxml-unpackaged-anes")).unwrap();

    let resolved = resolve(dir.path(), "{}").unwrap();

    assert_eq!(
        resolved.configuration.extdir,
        Some(dir.path().join("bin/.as3mxml-unpackaged-anes"))
    );
    assert_eq!(resolved.configuration.profile.as_deref(), Some("extendedDesktop"));
}

#[test]
fn test_attach_to_android_device() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "asconfig.json",
        r#"{
            "config": "airmobile",
            "application": {"android": "app-android.xml"},
            "airOptions": {"android": {"output": "bin/App.apk"}}
        }"#,
    );
    write(
        dir.path(),
        "app-android.xml",
        r#"<?xml version="1.0" encoding="utf-8"?>
<application xmlns="http://ns.adobe.com/air/application/33.1">
    <id>com.example.App</id>
</application>"#,
    );

    let resolved = resolve(dir.path(), r#"{"request": "attach", "platform": "AND"}"#).unwrap();

    assert_eq!(
        resolved.configuration.application_id.as_deref(),
        Some("com.example.App")
    );
    assert_eq!(resolved.configuration.bundle, Some(dir.path().join("bin/App.apk")));
}

#[test]
fn test_attach_without_bundle() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "asconfig.json", r#"{"application": "app.xml"}"#);
    write(dir.path(), "app.xml", "<id>com.example.App</id>");

    let err = resolve(dir.path(), r#"{"request": "attach", "platform": "ios"}"#).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error reading Adobe AIR output path for platform \"ios\"."
    );
}

#[test]
fn test_missing_manifest_with_declared_program() {
    let dir = TempDir::new().unwrap();

    let resolved = resolve(dir.path(), r#"{"program": "bin/Main.swf"}"#).unwrap();

    assert_eq!(resolved.configuration.program, Some(PathBuf::from("bin/Main.swf")));
    assert!(resolved.warnings.is_empty());
}

#[test]
fn test_missing_manifest_without_program() {
    let dir = TempDir::new().unwrap();
    let err = resolve(dir.path(), "{}").unwrap_err();
    assert!(matches!(err, ResolveError::MissingProgram));
}

#[test]
fn test_same_inputs_same_output() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "asconfig.json",
        r#"{"config": "air", "compilerOptions": {"output": "bin/App.swf"}, "files": ["src/App.as"]}"#,
    );
    let request = r#"{"name": "Launch", "noDebug": false, "screensize": "720p"}"#;

    let first = resolve(dir.path(), request).unwrap().configuration.to_json().unwrap();
    let second = resolve(dir.path(), request).unwrap().configuration.to_json().unwrap();

    assert_eq!(first, second);
}
