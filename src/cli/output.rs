//! Output formatting for resolved configurations and adapter commands.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::adapter::DebugAdapterExecutable;
use crate::request::DebugConfiguration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON, as accepted by launch.json
    Json,
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_configuration(&self, config: &DebugConfiguration) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(config),
            OutputFormat::Yaml => self.format_yaml(config),
            OutputFormat::Human => Ok(self.format_configuration_human(config)),
        }
    }

    pub fn format_adapter(&self, executable: &DebugAdapterExecutable) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(executable),
            OutputFormat::Yaml => self.format_yaml(executable),
            OutputFormat::Human => Ok(format!("{}\n", executable.command_line())),
        }
    }

    fn format_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut output = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
        output.push('\n');
        Ok(output)
    }

    fn format_yaml<T: Serialize>(&self, value: &T) -> Result<String> {
        serde_yaml::to_string(value).context("Failed to serialize to YAML")
    }

    fn format_configuration_human(&self, config: &DebugConfiguration) -> String {
        let mut output = String::new();

        let title = config.name.as_deref().unwrap_or("SWF debug configuration");
        output.push_str(&format!("{}\n\n", title));

        let mut field = |label: &str, value: Option<String>| {
            if let Some(value) = value {
                output.push_str(&format!("  {:<18} {}\n", label, value));
            }
        };

        field("Request:", config.request.map(|r| format!("{:?}", r).to_lowercase()));
        field("Program:", config.program.as_ref().map(|p| p.display().to_string()));
        field("Profile:", config.profile.clone());
        field("Extension dir:", config.extdir.as_ref().map(|p| p.display().to_string()));
        field("Platform:", config.platform.clone());
        field("Application ID:", config.application_id.clone());
        field("Bundle:", config.bundle.as_ref().map(|p| p.display().to_string()));
        field(
            "Platform SDK:",
            config.platformsdk.as_ref().map(|p| p.display().to_string()),
        );
        field(
            "Runtime:",
            config
                .runtime_executable
                .as_ref()
                .map(|p| p.display().to_string()),
        );

        output
    }
}
