use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use snowscape_runner_core::config::CONFIG_FILE_NAME;
use snowscape_runner_core::manifest::find_project_root;

const DEFAULT_CONFIG: &str = r#"# snowscape-runner configuration
#
# base_command: template used to launch the preview binary. In a
# workspace, `-p <package>` is inserted after the run verb
# automatically.
base_command = "cargo run --bin preview"

# parameter_convention: "environment-prefix" (default) or "positional-flag"
parameter_convention = "environment-prefix"
"#;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let start = match cwd {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    debug!("Initializing configuration from {:?}", start);

    let root = find_project_root(&start)
        .ok_or_else(|| anyhow!("No Cargo.toml found above {}", start.display()))?;

    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_parseable_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("Cargo.toml"), "[package]\nname = \"demo\"\n").unwrap();

        init_command(Some(root.to_str().unwrap()), false).unwrap();

        let config = snowscape_runner_core::RunnerConfig::load(root).unwrap();
        assert_eq!(config, snowscape_runner_core::RunnerConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("Cargo.toml"), "[package]\nname = \"demo\"\n").unwrap();
        fs::write(root.join(CONFIG_FILE_NAME), "base_command = \"custom\"\n").unwrap();

        assert!(init_command(Some(root.to_str().unwrap()), false).is_err());
        init_command(Some(root.to_str().unwrap()), true).unwrap();
    }
}
