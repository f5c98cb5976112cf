use clap::Parser;
use std::process::ExitCode;

use marquee::cli::{Cli, Commands};
use marquee::config::Config;
use marquee::logging::{self, LogTarget};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // A broken config file is reported by the command itself.
    let config = Config::load().unwrap_or_default();
    let target = match cli.command {
        Commands::Browse { .. } => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(&config, target) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match cli.command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
