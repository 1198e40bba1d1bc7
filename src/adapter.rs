//! Invocation of the SWF debug adapter, a Java program shipped with the
//! editor extension.

use crate::error::AdapterError;
use crate::platform::HostOs;
use crate::resolve::RuntimePaths;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const ADAPTER_MAIN_CLASS: &str = "com.as3mxml.vscode.SWFDebug";

/// A command line that starts the debug adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugAdapterExecutable {
    pub command: PathBuf,
    pub args: Vec<String>,
}

impl DebugAdapterExecutable {
    /// Shell-like rendering, for display only.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn build_adapter_executable(
    paths: &RuntimePaths,
    extension_path: &Path,
    workspace: Option<&Path>,
    host_os: HostOs,
) -> Result<DebugAdapterExecutable, AdapterError> {
    let java = paths.java_path.as_ref().ok_or(AdapterError::JavaNotFound)?;

    let mut args = Vec::new();
    if let Some(sdk) = &paths.sdk_path {
        // the adapter reads framework libraries from the SDK
        args.push(format!("-Dflexlib={}", sdk.join("frameworks").display()));
    }
    if let Some(workspace) = workspace {
        args.push(format!("-Dworkspace={}", workspace.display()));
    }

    let classpath = [
        extension_path.join("bin").join("*"),
        extension_path.join("bundled-debugger").join("*"),
    ]
    .iter()
    .map(|p| p.display().to_string())
    .collect::<Vec<_>>()
    .join(host_os.classpath_delimiter());

    args.push("-cp".to_string());
    args.push(classpath);
    args.push(ADAPTER_MAIN_CLASS.to_string());

    Ok(DebugAdapterExecutable {
        command: java.clone(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(sdk: Option<&str>) -> RuntimePaths {
        RuntimePaths {
            java_path: Some(PathBuf::from("/usr/bin/java")),
            sdk_path: sdk.map(PathBuf::from),
        }
    }

    #[test]
    fn test_full_invocation() {
        let exe = build_adapter_executable(
            &paths(Some("/opt/air-sdk")),
            Path::new("/ext"),
            Some(Path::new("/work")),
            HostOs::Mac,
        )
        .unwrap();

        assert_eq!(exe.command, PathBuf::from("/usr/bin/java"));
        assert_eq!(
            exe.args,
            vec![
                "-Dflexlib=/opt/air-sdk/frameworks",
                "-Dworkspace=/work",
                "-cp",
                "/ext/bin/*:/ext/bundled-debugger/*",
                "com.as3mxml.vscode.SWFDebug",
            ]
        );
    }

    #[test]
    fn test_without_sdk_or_workspace() {
        let exe = build_adapter_executable(&paths(None), Path::new("/ext"), None, HostOs::Other).unwrap();
        assert_eq!(exe.args[0], "-cp");
        assert_eq!(exe.args.len(), 3);
    }

    #[test]
    fn test_windows_classpath_delimiter() {
        let exe = build_adapter_executable(&paths(None), Path::new("/ext"), None, HostOs::Windows).unwrap();
        assert!(exe.args[1].contains("/ext/bin/*;"));
    }

    #[test]
    fn test_java_not_found() {
        let err = build_adapter_executable(&RuntimePaths::default(), Path::new("/ext"), None, HostOs::Other)
            .unwrap_err();
        assert!(matches!(err, AdapterError::JavaNotFound));
    }

    #[test]
    fn test_command_line() {
        let exe = build_adapter_executable(&paths(None), Path::new("/ext"), None, HostOs::Other).unwrap();
        assert_eq!(
            exe.command_line(),
            "/usr/bin/java -cp /ext/bin/*:/ext/bundled-debugger/* com.as3mxml.vscode.SWFDebug"
        );
    }
}
