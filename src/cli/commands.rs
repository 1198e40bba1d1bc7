use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Resolve SWF and Adobe AIR debug configurations from asconfig.json
#[derive(Parser, Debug)]
#[command(
    name = "swf-launch",
    about = "Resolve SWF and Adobe AIR debug configurations from asconfig.json",
    version,
    author,
    long_about = "swf-launch fills in a minimal SWF debug request (program, profile, \
                  native extension directory, application id, bundle) using the project's \
                  asconfig.json, and builds the command line that starts the SWF debug adapter."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Log resolution decisions")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress warnings"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Resolve a debug request",
        long_about = "Reads a debug request as JSON (from a file or stdin), fills in missing \
                      fields from asconfig.json and prints the resolved configuration.\n\n\
                      Examples:\n  \
                      echo '{}' | swf-launch resolve --workspace .\n  \
                      swf-launch resolve --workspace . --request launch.json --format yaml"
    )]
    Resolve(ResolveArgs),

    #[command(
        about = "Print the initial debug configurations",
        long_about = "Prints the configurations offered for a new launch.json.\n\n\
                      Examples:\n  \
                      swf-launch init --workspace ."
    )]
    Init(InitArgs),

    #[command(
        about = "Print the debug adapter command",
        long_about = "Prints the Java command line that starts the SWF debug adapter.\n\n\
                      Examples:\n  \
                      swf-launch adapter --extension-path ~/.vscode/extensions/as3mxml\n  \
                      swf-launch adapter --extension-path ./ext --workspace . --format json"
    )]
    Adapter(AdapterArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    #[arg(short = 'w', long, value_name = "DIR", help = "Workspace folder containing asconfig.json")]
    pub workspace: Option<PathBuf>,

    #[arg(
        short = 'r',
        long,
        value_name = "FILE",
        help = "Debug request JSON (reads stdin when omitted)"
    )]
    pub request: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value = "json", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    #[arg(short = 'w', long, value_name = "DIR", help = "Workspace folder")]
    pub workspace: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct AdapterArgs {
    #[arg(
        short = 'e',
        long,
        value_name = "DIR",
        help = "Install directory of the extension bundling the adapter (defaults to SWF_LAUNCH_EXTENSION_PATH)"
    )]
    pub extension_path: Option<PathBuf>,

    #[arg(short = 'w', long, value_name = "DIR", help = "Workspace folder")]
    pub workspace: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
