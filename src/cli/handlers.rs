//! Subcommand implementations. Each handler returns the process exit code.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use super::commands::{AdapterArgs, InitArgs, ResolveArgs};
use super::output::OutputFormatter;
use crate::adapter::build_adapter_executable;
use crate::config::LauncherConfig;
use crate::fs::RealFileSystem;
use crate::paths;
use crate::platform::HostOs;
use crate::request::{initial_configurations, DebugConfiguration};
use crate::resolve::DebugConfigurationResolver;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RESOLVE_FAILED: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

pub fn handle_resolve(args: &ResolveArgs, quiet: bool) -> i32 {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => return report_usage_error(e),
    };
    let request = match read_request(args.request.as_deref()) {
        Ok(request) => request,
        Err(e) => return report_usage_error(e),
    };
    let workspace = match args.workspace.as_deref().map(absolute).transpose() {
        Ok(workspace) => workspace,
        Err(e) => return report_usage_error(e),
    };

    let fs = RealFileSystem::new();
    let resolver = DebugConfigurationResolver::new(&fs, &config);

    let resolved = match resolver.resolve(workspace.as_deref(), request) {
        Ok(resolved) => resolved,
        Err(e) => {
            error!(error = ?e, "resolution failed");
            eprintln!("{}", e);
            return if e.is_io() { EXIT_USAGE } else { EXIT_RESOLVE_FAILED };
        }
    };

    if !quiet {
        for warning in &resolved.warnings {
            eprintln!("warning: {}", warning);
        }
    }

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_configuration(&resolved.configuration) {
        Ok(output) => {
            print!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => report_usage_error(e),
    }
}

pub fn handle_init(args: &InitArgs) -> i32 {
    let workspace = match args.workspace.as_deref().map(absolute).transpose() {
        Ok(workspace) => workspace,
        Err(e) => return report_usage_error(e),
    };

    let configurations = initial_configurations(workspace.as_deref());
    match serde_json::to_string_pretty(&configurations) {
        Ok(output) => {
            println!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => report_usage_error(e.into()),
    }
}

pub fn handle_adapter(args: &AdapterArgs) -> i32 {
    match adapter_output(args) {
        Ok(output) => {
            print!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            EXIT_USAGE
        }
    }
}

fn adapter_output(args: &AdapterArgs) -> Result<String> {
    let config = load_config()?;
    let extension_path = match &args.extension_path {
        Some(path) => path.clone(),
        None => config.require_extension_path()?.to_path_buf(),
    };
    let workspace = args.workspace.as_deref().map(absolute).transpose()?;

    let executable = build_adapter_executable(
        &config.runtime_paths(),
        &extension_path,
        workspace.as_deref(),
        HostOs::current(),
    )?;
    debug!(command = %executable.command.display(), "built adapter command");

    OutputFormatter::new(args.format.into()).format_adapter(&executable)
}

fn load_config() -> Result<LauncherConfig> {
    let config = LauncherConfig::from_env();
    config.validate()?;
    Ok(config)
}

fn read_request(path: Option<&Path>) -> Result<DebugConfiguration> {
    let content = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display()))?,
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read request from stdin")?;
            content
        }
    };

    if content.trim().is_empty() {
        return Ok(DebugConfiguration::default());
    }

    DebugConfiguration::from_json(&content).context("Failed to parse debug request JSON")
}

fn absolute(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    Ok(paths::resolve(&cwd, path))
}

fn report_usage_error(e: anyhow::Error) -> i32 {
    eprintln!("Error: {:#}", e);
    EXIT_USAGE
}
