use swf_launch::cli::commands::{CliArgs, Commands};
use swf_launch::cli::handlers::{handle_adapter, handle_init, handle_resolve};
use swf_launch::config::ENV_LOG_LEVEL;
use swf_launch::util::logging::{init_logging, json_requested, parse_level, LoggingConfig};
use swf_launch::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("swf-launch v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Resolve(resolve_args) => handle_resolve(resolve_args, args.quiet),
        Commands::Init(init_args) => handle_init(init_args),
        Commands::Adapter(adapter_args) => handle_adapter(adapter_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        env::var(ENV_LOG_LEVEL)
            .map(|v| parse_level(&v))
            .unwrap_or(Level::WARN)
    };

    let config = if json_requested() {
        LoggingConfig {
            level,
            ..LoggingConfig::structured()
        }
    } else {
        LoggingConfig::with_level(level)
    };

    init_logging(config);
}
