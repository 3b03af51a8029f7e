use std::fs;
use std::path::Path;
use tracing::debug;

use crate::manifest::{find_enclosing_package, has_workspace_section};

const CANONICAL_RUN: &str = "cargo run";
const RUN_VERB: &str = "run";

/// Scope a base command to the package enclosing `relative_file_path`.
///
/// Pass-through cases: unreadable root manifest, single-package project
/// (no `[workspace]` in the root manifest), no enclosing package found
/// below the root, or a base command without a recognizable run verb.
/// Reads the filesystem fresh on every call; given unchanged manifests
/// and identical inputs the result is identical.
pub fn resolve(base_command: &str, project_root: &Path, relative_file_path: &Path) -> String {
    let root_manifest = match fs::read_to_string(project_root.join("Cargo.toml")) {
        Ok(contents) => contents,
        Err(_) => {
            debug!("No readable manifest at {:?}, command left unscoped", project_root);
            return base_command.to_string();
        }
    };

    if !has_workspace_section(&root_manifest) {
        debug!("Single-package project, command left unscoped");
        return base_command.to_string();
    }

    let Some(package) = find_enclosing_package(project_root, relative_file_path) else {
        debug!(
            "No enclosing package for {:?}, command left unscoped",
            relative_file_path
        );
        return base_command.to_string();
    };

    scope_to_package(base_command, &package)
}

/// Insert `-p <package>` after the run verb, preferring the canonical
/// `cargo run` form. Commands without a recognizable verb are returned
/// unchanged rather than guessed at.
fn scope_to_package(base_command: &str, package: &str) -> String {
    if base_command.contains(CANONICAL_RUN) {
        return base_command.replacen(CANONICAL_RUN, &format!("{CANONICAL_RUN} -p {package}"), 1);
    }
    if let Some(index) = base_command.find(RUN_VERB) {
        let insert_at = index + RUN_VERB.len();
        return format!(
            "{} -p {}{}",
            &base_command[..insert_at],
            package,
            &base_command[insert_at..]
        );
    }
    base_command.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form_is_rewritten_after_the_verb() {
        assert_eq!(
            scope_to_package("cargo run --bin preview", "demo"),
            "cargo run -p demo --bin preview"
        );
    }

    #[test]
    fn test_bare_run_verb_gets_flag_inserted() {
        assert_eq!(
            scope_to_package("just run preview", "demo"),
            "just run -p demo preview"
        );
    }

    #[test]
    fn test_unrecognized_shape_passes_through() {
        assert_eq!(
            scope_to_package("make preview", "demo"),
            "make preview"
        );
    }

    #[test]
    fn test_only_first_canonical_occurrence_is_rewritten() {
        assert_eq!(
            scope_to_package("cargo run --bin cargo run", "demo"),
            "cargo run -p demo --bin cargo run"
        );
    }
}
