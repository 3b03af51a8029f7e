use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// A fully-assembled preview launch: the shell command to run and the
/// key naming the execution surface it should run in. Hosts use the key
/// to find-or-create a terminal; the standalone binary just executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub terminal_key: String,
}

impl Invocation {
    /// Run the command through the shell in `working_dir`.
    pub fn execute(&self, working_dir: &Path) -> io::Result<ExitStatus> {
        debug!("Executing in {:?}: {}", working_dir, self.command);
        Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .current_dir(working_dir)
            .status()
    }
}
