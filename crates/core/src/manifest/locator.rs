use std::fs;
use std::path::Path;
use tracing::debug;

/// Find the nearest enclosing package for a file inside a project.
///
/// Walks ancestor directories from the file's immediate parent up to,
/// but not including, the project root, reading `Cargo.toml` fresh at
/// each level. The first manifest that yields a package name wins; a
/// missing, unreadable, or name-less manifest at some level just moves
/// the walk outward.
pub fn find_enclosing_package(project_root: &Path, relative_file_path: &Path) -> Option<String> {
    let mut dir = relative_file_path.parent();
    while let Some(current) = dir {
        if current.as_os_str().is_empty() {
            break;
        }
        let manifest_path = project_root.join(current).join("Cargo.toml");
        if let Ok(contents) = fs::read_to_string(&manifest_path) {
            if let Some(name) = package_name(&contents) {
                debug!("Found enclosing package '{}' at {:?}", name, manifest_path);
                return Some(name);
            }
            debug!("Manifest without a package name at {:?}", manifest_path);
        }
        dir = current.parent();
    }
    None
}

/// Extract `name = "<value>"` from the `[package]` section of manifest
/// text. Only lines between the `[package]` header and the next section
/// header are considered.
pub fn package_name(manifest: &str) -> Option<String> {
    let mut in_package = false;
    for line in manifest.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_package = trimmed == "[package]";
            continue;
        }
        if !in_package {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("name") {
            if let Some(value) = rest.trim_start().strip_prefix('=') {
                let value = value.trim().trim_matches('"');
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Whether manifest text declares a multi-package workspace.
pub fn has_workspace_section(manifest: &str) -> bool {
    manifest.lines().any(|line| line.trim() == "[workspace]")
}
