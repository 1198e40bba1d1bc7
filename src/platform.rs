//! Target platforms and how they map onto `asconfig.json` keys.

/// A platform that can have its own application descriptor or packaging
/// options in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKey {
    Android,
    Ios,
    IosSimulator,
    Windows,
    Mac,
}

impl PlatformKey {
    /// Parse a launch `versionPlatform` value (`AND`, `IOS`, `WIN`, `MAC`).
    pub fn from_version_platform(value: &str) -> Option<Self> {
        match value {
            "AND" => Some(PlatformKey::Android),
            "IOS" => Some(PlatformKey::Ios),
            "WIN" => Some(PlatformKey::Windows),
            "MAC" => Some(PlatformKey::Mac),
            _ => None,
        }
    }

    /// Parse an attach `platform` value.
    ///
    /// Accepts the version-platform codes as well as the lowercase names
    /// used by the device tooling.
    pub fn from_attach_platform(value: &str) -> Option<Self> {
        Self::from_version_platform(value).or(match value {
            "android" => Some(PlatformKey::Android),
            "ios" => Some(PlatformKey::Ios),
            "ios_simulator" => Some(PlatformKey::IosSimulator),
            "windows" => Some(PlatformKey::Windows),
            "mac" => Some(PlatformKey::Mac),
            _ => None,
        })
    }
}

/// Operating system the resolver runs on.
///
/// Only used to pick a desktop descriptor when the request names no
/// platform; passed in explicitly so resolution is testable on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Mac,
    Other,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            HostOs::Windows
        } else if cfg!(target_os = "macos") {
            HostOs::Mac
        } else {
            HostOs::Other
        }
    }

    /// Desktop descriptor for this host, if it has one.
    pub fn desktop_platform(self) -> Option<PlatformKey> {
        match self {
            HostOs::Windows => Some(PlatformKey::Windows),
            HostOs::Mac => Some(PlatformKey::Mac),
            HostOs::Other => None,
        }
    }

    /// Separator between entries of a Java classpath.
    pub fn classpath_delimiter(self) -> &'static str {
        match self {
            HostOs::Windows => ";",
            _ => ":",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        android = { "AND", Some(PlatformKey::Android) },
        ios = { "IOS", Some(PlatformKey::Ios) },
        windows = { "WIN", Some(PlatformKey::Windows) },
        mac = { "MAC", Some(PlatformKey::Mac) },
        lowercase_is_not_a_code = { "and", None },
        unknown = { "LNX", None },
    )]
    fn test_from_version_platform(value: &str, expected: Option<PlatformKey>) {
        assert_eq!(PlatformKey::from_version_platform(value), expected);
    }

    #[parameterized(
        code = { "AND", Some(PlatformKey::Android) },
        name = { "android", Some(PlatformKey::Android) },
        simulator = { "ios_simulator", Some(PlatformKey::IosSimulator) },
        unknown = { "blackberry", None },
    )]
    fn test_from_attach_platform(value: &str, expected: Option<PlatformKey>) {
        assert_eq!(PlatformKey::from_attach_platform(value), expected);
    }

    #[test]
    fn test_host_desktop_platform() {
        assert_eq!(HostOs::Windows.desktop_platform(), Some(PlatformKey::Windows));
        assert_eq!(HostOs::Mac.desktop_platform(), Some(PlatformKey::Mac));
        assert_eq!(HostOs::Other.desktop_platform(), None);
        assert_eq!(HostOs::Windows.classpath_delimiter(), ";");
        assert_eq!(HostOs::Mac.classpath_delimiter(), ":");
    }
}
