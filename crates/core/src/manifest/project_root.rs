use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::locator::has_workspace_section;

/// Locate the project root for a directory: the outermost ancestor
/// whose `Cargo.toml` declares `[workspace]`, falling back to the
/// outermost ancestor carrying any `Cargo.toml`.
///
/// Editor hosts hand the core an explicit root; the standalone binary
/// has to discover one from the file it was pointed at.
pub fn find_project_root(start_dir: &Path) -> Option<PathBuf> {
    let mut workspace_root = None;
    let mut manifest_root = None;

    for dir in start_dir.ancestors() {
        let manifest_path = dir.join("Cargo.toml");
        if let Ok(contents) = fs::read_to_string(&manifest_path) {
            manifest_root = Some(dir.to_path_buf());
            if has_workspace_section(&contents) {
                workspace_root = Some(dir.to_path_buf());
            }
        }
    }

    let root = workspace_root.or(manifest_root);
    debug!("Project root for {:?}: {:?}", start_dir, root);
    root
}
