use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use snowscape_runner_core::manifest::find_project_root;
use snowscape_runner_core::{PreviewTarget, RunnerConfig, dispatch, resolve, scan_source};

use crate::utils::parse_filepath_with_line;

pub fn run_command(filepath_arg: &str, function: Option<&str>, dry_run: bool) -> Result<()> {
    // Parse filepath and line number
    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    debug!("Launching preview in {} at line {:?}", filepath, line);

    let path = Path::new(&filepath);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let source = fs::read_to_string(&absolute)
        .with_context(|| format!("Failed to read {}", absolute.display()))?;
    let targets = scan_source(&source, &absolute);
    let target = select_target(&targets, function, line)
        .ok_or_else(|| anyhow!("No previewable function at the specified location"))?;

    let start_dir = absolute.parent().unwrap_or(Path::new("."));
    let project_root = find_project_root(start_dir)
        .ok_or_else(|| anyhow!("No Cargo.toml found above {}", absolute.display()))?;
    let relative = absolute.strip_prefix(&project_root).unwrap_or(&absolute);

    let config = RunnerConfig::load(&project_root)?;
    let resolved = resolve(&config.base_command, &project_root, relative);
    let invocation = dispatch(&resolved, &target.function_name, config.parameter_convention);

    if dry_run {
        println!("{}", invocation.command);
    } else {
        info!("Running: {}", invocation.command);
        let status = invocation
            .execute(&project_root)
            .with_context(|| format!("Failed to execute: {}", invocation.command))?;
        if !status.success() {
            std::process::exit(status.code().unwrap_or(1));
        }
    }

    Ok(())
}

/// Pick the target to launch: by explicit name, else the first target
/// at or after the requested line (falling back to the last one above
/// it), else the first in the file.
fn select_target<'a>(
    targets: &'a [PreviewTarget],
    function: Option<&str>,
    line: Option<usize>,
) -> Option<&'a PreviewTarget> {
    if let Some(name) = function {
        return targets.iter().find(|t| t.function_name == name);
    }
    if let Some(line) = line {
        return targets
            .iter()
            .find(|t| t.line >= line)
            .or_else(|| targets.iter().rev().find(|t| t.line < line));
    }
    targets.first()
}
