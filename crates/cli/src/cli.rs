use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "snowscape-runner")]
#[command(version, about = "Detect and launch snowscape previews", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List previewable functions in a file
    #[command(visible_alias = "s")]
    Scan {
        /// Path to the Rust file to scan
        filepath: String,

        /// Emit targets as JSON for editor hosts
        #[arg(short, long)]
        json: bool,
    },
    /// Launch the preview for a function
    #[command(visible_alias = "r")]
    Run {
        /// Path to the Rust file with optional line number (e.g., src/lib.rs:42)
        filepath: String,

        /// Preview function to launch (defaults to the one nearest the given line)
        #[arg(short, long)]
        function: Option<String>,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Write a default snowscape-runner.toml at the project root
    Init {
        /// Specify the current working directory
        #[arg(short, long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}
