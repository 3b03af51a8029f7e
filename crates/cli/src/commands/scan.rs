use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use snowscape_runner_core::scan_source;

pub fn scan_command(filepath: &str, json: bool) -> Result<()> {
    debug!("Scanning file: {}", filepath);

    let path = Path::new(filepath);
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let targets = scan_source(&source, path);

    if json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
    } else if targets.is_empty() {
        println!("No previewable functions in {}", path.display());
    } else {
        for target in &targets {
            println!(
                "{}:{} {} [{}]",
                path.display(),
                target.line + 1,
                target.label(),
                target.kind
            );
        }
    }

    Ok(())
}
