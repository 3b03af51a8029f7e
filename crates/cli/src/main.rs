use anyhow::Result;
use clap::Parser;

use snowscape_runner::cli::{Cli, Commands};
use snowscape_runner::commands::{init_command, run_command, scan_command};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan { filepath, json } => scan_command(&filepath, json),
        Commands::Run {
            filepath,
            function,
            dry_run,
        } => run_command(&filepath, function.as_deref(), dry_run),
        Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
    }
}
