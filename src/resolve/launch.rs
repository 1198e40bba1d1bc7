//! Launch request resolution.
//!
//! Works out what to launch and how:
//!
//! 1. whether the SWF must run inside the AIR launcher (packaging mode, an
//!    application descriptor, or AIR-only request fields),
//! 2. which descriptor applies on the requested platform,
//! 3. the program, from the first applicable rule in [`PROGRAM_RULES`],
//! 4. whether a runtime is available for AIR,
//! 5. the native extension directory and the profile, when not declared.

use super::rules::{first_match, Rule};
use crate::error::ResolveError;
use crate::extensions::{scan_native_extensions, unpackaged_dir_for};
use crate::fs::FileSystem;
use crate::manifest::{DescriptorRef, LoadedManifest};
use crate::paths;
use crate::platform::{HostOs, PlatformKey};
use crate::request::DebugConfiguration;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const FILE_EXTENSION_SWF: &str = ".swf";
pub const FILE_EXTENSION_XML: &str = ".xml";
pub const FILE_EXTENSION_AS: &str = ".as";
pub const FILE_EXTENSION_MXML: &str = ".mxml";
pub const SUFFIX_AIR_APP: &str = "-app.xml";

pub const PROFILE_MOBILE_DEVICE: &str = "mobileDevice";
pub const PROFILE_EXTENDED_DESKTOP: &str = "extendedDesktop";

/// Result of resolving a launch request.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchResolution {
    pub configuration: DebugConfiguration,
    /// The program runs inside the AIR launcher rather than a Flash Player
    pub requires_wrapper: bool,
    pub is_mobile: bool,
    /// Messages worth showing the user; resolution still succeeded
    pub warnings: Vec<String>,
}

/// Everything the manifest and request say about what to launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchFacts {
    pub requires_wrapper: bool,
    pub is_mobile: bool,
    pub descriptor: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub source_paths: Vec<PathBuf>,
    pub entry_point: Option<PathBuf>,
    pub animate_file: Option<PathBuf>,
}

impl LaunchFacts {
    pub fn gather(
        fs: &dyn FileSystem,
        host_os: HostOs,
        loaded: &LoadedManifest,
        config: &DebugConfiguration,
    ) -> Self {
        let manifest = &loaded.manifest;
        let mut facts = LaunchFacts {
            requires_wrapper: manifest.config.requires_wrapper(),
            is_mobile: manifest.config.is_mobile(),
            ..Default::default()
        };

        if let Some(application) = &manifest.application {
            facts.requires_wrapper = true;
            facts.descriptor = select_descriptor(application, config, facts.is_mobile, host_os)
                .map(|path| loaded.resolve_path(path));
        }

        if config.has_wrapper_fields() {
            facts.requires_wrapper = true;
        }

        let compiler = &manifest.compiler_options;
        facts.output = compiler.output.as_deref().map(|p| loaded.resolve_path(p));
        facts.source_paths = loaded.resolve_all(&compiler.source_path);

        facts.entry_point = manifest.entry_file().map(|p| loaded.resolve_path(p));
        if let Some(main_class) = manifest.main_class.as_deref() {
            if let Some(found) = find_main_class(fs, &facts.source_paths, main_class) {
                facts.entry_point = Some(found);
            }
        }

        facts.animate_file = manifest
            .animate_options
            .file
            .as_deref()
            .map(|p| loaded.resolve_path(p));

        facts
    }
}

/// Pick the descriptor for the launch.
///
/// A per-platform mapping is keyed by `versionPlatform`. Without one, mobile
/// projects try iOS then Android, and desktop projects use the host OS.
fn select_descriptor<'a>(
    application: &'a DescriptorRef,
    config: &DebugConfiguration,
    is_mobile: bool,
    host_os: HostOs,
) -> Option<&'a str> {
    match application {
        DescriptorRef::Path(path) => Some(path.as_str()),
        DescriptorRef::PerPlatform(map) => match config.declared_version_platform() {
            Some(version_platform) => {
                PlatformKey::from_version_platform(version_platform).and_then(|key| map.get(key))
            }
            None if is_mobile => map.get(PlatformKey::Ios).or_else(|| map.get(PlatformKey::Android)),
            None => host_os.desktop_platform().and_then(|key| map.get(key)),
        },
    }
}

/// Locate the source file of a fully-qualified main class.
fn find_main_class(fs: &dyn FileSystem, source_paths: &[PathBuf], main_class: &str) -> Option<PathBuf> {
    let relative: PathBuf = main_class.split('.').collect();
    source_paths.iter().find_map(|source_path| {
        [FILE_EXTENSION_AS, FILE_EXTENSION_MXML]
            .iter()
            .map(|ext| {
                let mut candidate = source_path.join(&relative).into_os_string();
                candidate.push(ext);
                PathBuf::from(candidate)
            })
            .find(|candidate| fs.is_file(candidate))
    })
}

fn has_descriptor(f: &LaunchFacts) -> bool {
    f.descriptor.is_some()
}

/// The build copies the descriptor next to the compiled SWF.
fn descriptor_program(f: &LaunchFacts) -> Option<PathBuf> {
    let descriptor = f.descriptor.as_deref()?;
    match f.output.as_deref() {
        Some(output) => Some(paths::parent_dir(output).join(paths::file_name(descriptor))),
        None => Some(descriptor.to_path_buf()),
    }
}

fn requires_wrapper(f: &LaunchFacts) -> bool {
    f.requires_wrapper
}

/// With no descriptor declared, the build copies the SDK template and names
/// it after the entry point (or the output).
fn synthesized_descriptor(f: &LaunchFacts) -> Option<PathBuf> {
    let source = f.entry_point.as_deref().or(f.output.as_deref())?;
    let dir = paths::parent_dir(f.output.as_deref().unwrap_or(source));
    let file_name = paths::file_name(source);
    let base = paths::strip_all_extensions(&file_name);
    Some(dir.join(format!("{}{}", base, SUFFIX_AIR_APP)))
}

fn has_output(f: &LaunchFacts) -> bool {
    f.output.is_some()
}

fn output_program(f: &LaunchFacts) -> Option<PathBuf> {
    f.output.clone()
}

fn has_animate_file(f: &LaunchFacts) -> bool {
    f.animate_file.is_some()
}

fn animate_program(f: &LaunchFacts) -> Option<PathBuf> {
    f.animate_file
        .as_deref()
        .map(|p| paths::replace_extension(p, FILE_EXTENSION_SWF))
}

fn has_entry_point(f: &LaunchFacts) -> bool {
    f.entry_point.is_some()
}

/// Without an output option the compiler writes `<entry>.swf` next to the
/// entry point.
fn entry_point_program(f: &LaunchFacts) -> Option<PathBuf> {
    f.entry_point
        .as_deref()
        .map(|p| paths::replace_extension(p, FILE_EXTENSION_SWF))
}

/// Program precedence, highest first.
pub const PROGRAM_RULES: &[Rule<LaunchFacts>] = &[
    Rule {
        name: "application descriptor",
        applies: has_descriptor,
        derive: descriptor_program,
    },
    Rule {
        name: "generated application descriptor",
        applies: requires_wrapper,
        derive: synthesized_descriptor,
    },
    Rule {
        name: "compiler output",
        applies: has_output,
        derive: output_program,
    },
    Rule {
        name: "animate file",
        applies: has_animate_file,
        derive: animate_program,
    },
    Rule {
        name: "entry point",
        applies: has_entry_point,
        derive: entry_point_program,
    },
];

pub struct LaunchResolver<'a> {
    fs: &'a dyn FileSystem,
    host_os: HostOs,
    sdk_path: Option<PathBuf>,
}

impl<'a> LaunchResolver<'a> {
    pub fn new(fs: &'a dyn FileSystem, host_os: HostOs, sdk_path: Option<PathBuf>) -> Self {
        Self { fs, host_os, sdk_path }
    }

    pub fn resolve(
        &self,
        loaded: &LoadedManifest,
        mut config: DebugConfiguration,
    ) -> Result<LaunchResolution, ResolveError> {
        let mut facts = LaunchFacts::gather(self.fs, self.host_os, loaded, &config);
        let mut warnings = Vec::new();

        let program = match config.declared_program() {
            Some(declared) => {
                let declared = declared.to_path_buf();
                if paths::has_extension(&declared, FILE_EXTENSION_XML) {
                    facts.requires_wrapper = true;
                }
                if let Some(derived) = first_match(PROGRAM_RULES, &facts).and_then(|d| d.path) {
                    if derived != loaded.resolve_path(&declared) {
                        let message = format!(
                            "Using \"program\" {} from the debug configuration instead of {} inferred from {}.",
                            declared.display(),
                            derived.display(),
                            paths::file_name(&loaded.path)
                        );
                        debug!("{}", message);
                        warnings.push(message);
                    }
                }
                declared
            }
            None => {
                let decision = first_match(PROGRAM_RULES, &facts);
                debug!(rule = ?decision.as_ref().map(|d| d.rule), "derived program");
                decision
                    .and_then(|d| d.path)
                    .ok_or(ResolveError::MissingProgram)?
            }
        };

        if facts.requires_wrapper
            && self.sdk_path.is_none()
            && config.declared_runtime_executable().is_none()
        {
            return Err(ResolveError::MissingRuntime);
        }

        if facts.requires_wrapper && config.declared_extdir().is_none() {
            if let Some(extdir) = self.find_extdir(loaded, &program)? {
                config.extdir = Some(extdir);
            }
        }

        if config.declared_profile().is_none() {
            if facts.is_mobile {
                config.profile = Some(PROFILE_MOBILE_DEVICE.to_string());
            } else if config.declared_extdir().is_some() {
                config.profile = Some(PROFILE_EXTENDED_DESKTOP.to_string());
            }
        }

        debug!(
            program = %program.display(),
            requires_wrapper = facts.requires_wrapper,
            is_mobile = facts.is_mobile,
            "resolved launch"
        );
        config.program = Some(program);

        Ok(LaunchResolution {
            configuration: config,
            requires_wrapper: facts.requires_wrapper,
            is_mobile: facts.is_mobile,
            warnings,
        })
    }

    /// The unpacked extension directory next to the program, if the build
    /// created it and the library paths reference at least one extension.
    fn find_extdir(&self, loaded: &LoadedManifest, program: &Path) -> Result<Option<PathBuf>, ResolveError> {
        let program_dir = paths::parent_dir(&loaded.resolve_path(program));
        let unpackaged = unpackaged_dir_for(&program_dir);
        if !self.fs.is_dir(&unpackaged) {
            return Ok(None);
        }

        let compiler = &loaded.manifest.compiler_options;
        let entries: Vec<&str> = compiler
            .library_path
            .iter()
            .chain(compiler.external_library_path.iter())
            .map(String::as_str)
            .collect();
        let archives = scan_native_extensions(self.fs, &loaded.project_root, &entries)?;
        debug!(dir = %unpackaged.display(), archives = archives.len(), "checked native extensions");

        Ok((!archives.is_empty()).then_some(unpackaged))
    }
}
