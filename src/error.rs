use crate::extensions::ScanError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a debug configuration could not be resolved.
///
/// The `Display` text of every variant is meant to be shown to the user as-is.
/// Resolution stops at the first error; no partial configuration is returned.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to debug SWF. Error reading file: {}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to debug SWF. Error parsing file: {}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: json5::Error,
    },

    #[error("Failed to debug SWF. Error reading file: {}", .path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to debug SWF. Error reading directory: {}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing \"program\" path for SWF debug configuration. Must be a .swf file or an Adobe AIR application descriptor.")]
    MissingProgram,

    #[error("Missing \"runtime executable\" path for SWF debug configuration. Requires \"adl\" from an Adobe AIR SDK.")]
    MissingRuntime,

    #[error("Error reading Adobe AIR application <id> for platform \"{platform}\".")]
    MissingApplicationId { platform: String },

    #[error("Error reading Adobe AIR output path for platform \"{platform}\".")]
    MissingBundle { platform: String },

    #[error("Failed to debug SWF. No workspace folder is open; set \"asconfigPath\" to an absolute path.")]
    AmbiguousWorkspace,

    #[error("SWF debugger launch failed. Java path not found.")]
    JavaNotFound,
}

impl ResolveError {
    /// Whether the error comes from reading or parsing a file, as opposed to
    /// a precondition of the request not being met.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ResolveError::ManifestRead { .. }
                | ResolveError::ManifestParse { .. }
                | ResolveError::DescriptorRead { .. }
                | ResolveError::DirectoryRead { .. }
        )
    }
}

impl From<ScanError> for ResolveError {
    fn from(err: ScanError) -> Self {
        ResolveError::DirectoryRead {
            path: err.path,
            source: err.source,
        }
    }
}

/// Errors building the debug adapter invocation.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("SWF debugger launch failed. Java path not found.")]
    JavaNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_platform() {
        let err = ResolveError::MissingBundle {
            platform: "android".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error reading Adobe AIR output path for platform \"android\"."
        );

        let err = ResolveError::MissingApplicationId {
            platform: "ios".to_string(),
        };
        assert!(err.to_string().contains("<id>"));
        assert!(err.to_string().contains("\"ios\""));
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error as _;

        let err = ResolveError::ManifestRead {
            path: PathBuf::from("/project/asconfig.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().ends_with("/project/asconfig.json"));
        assert!(err.source().is_some());
        assert!(err.is_io());
        assert!(!ResolveError::MissingProgram.is_io());
    }
}
