//! End-to-end tests for package-scoped command resolution

use snowscape_runner_core::command::resolve;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BASE_COMMAND: &str = "cargo run --bin preview";

/// Workspace root with one member two levels above a deeply nested file.
fn workspace_fixture() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("crates/demo/src/widgets")).unwrap();

    fs::write(
        root.join("Cargo.toml"),
        r#"[workspace]
members = ["crates/demo"]
resolver = "2"
"#,
    )
    .unwrap();

    fs::write(
        root.join("crates/demo/Cargo.toml"),
        r#"[package]
name = "demo"
version = "0.1.0"
edition = "2021"
"#,
    )
    .unwrap();

    fs::write(
        root.join("crates/demo/src/widgets/button.rs"),
        "#[snowscape::preview]\npub fn my_button() {}\n",
    )
    .unwrap();

    temp_dir
}

#[test]
fn test_workspace_file_gets_package_scoped_command() {
    let fixture = workspace_fixture();
    let resolved = resolve(
        BASE_COMMAND,
        fixture.path(),
        Path::new("crates/demo/src/widgets/button.rs"),
    );
    assert_eq!(resolved, "cargo run -p demo --bin preview");
}

#[test]
fn test_single_package_project_is_never_scoped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(
        root.join("Cargo.toml"),
        "[package]\nname = \"solo\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();

    let resolved = resolve(BASE_COMMAND, root, Path::new("src/main.rs"));
    assert_eq!(resolved, BASE_COMMAND);
}

#[test]
fn test_missing_root_manifest_passes_through() {
    let temp_dir = TempDir::new().unwrap();
    let resolved = resolve(BASE_COMMAND, temp_dir.path(), Path::new("src/main.rs"));
    assert_eq!(resolved, BASE_COMMAND);
}

#[test]
fn test_no_manifest_between_file_and_root_passes_through() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("tools/scripts")).unwrap();
    fs::write(root.join("Cargo.toml"), "[workspace]\nmembers = []\n").unwrap();

    let resolved = resolve(BASE_COMMAND, root, Path::new("tools/scripts/gen.rs"));
    assert_eq!(resolved, BASE_COMMAND);
}

#[test]
fn test_manifest_without_package_section_is_walked_past() {
    let fixture = workspace_fixture();
    let root = fixture.path();

    // A nested manifest with no [package] section sits closer to the
    // file; the walk must continue outward to the real member.
    fs::create_dir_all(root.join("crates/demo/src/widgets")).unwrap();
    fs::write(
        root.join("crates/demo/src/Cargo.toml"),
        "[lib]\nname = \"not_a_package\"\n",
    )
    .unwrap();

    let resolved = resolve(
        BASE_COMMAND,
        root,
        Path::new("crates/demo/src/widgets/button.rs"),
    );
    assert_eq!(resolved, "cargo run -p demo --bin preview");
}

#[test]
fn test_unrecognized_command_shape_passes_through() {
    let fixture = workspace_fixture();
    let resolved = resolve(
        "make preview",
        fixture.path(),
        Path::new("crates/demo/src/widgets/button.rs"),
    );
    assert_eq!(resolved, "make preview");
}

#[test]
fn test_resolution_is_idempotent_across_calls() {
    let fixture = workspace_fixture();
    let path = Path::new("crates/demo/src/widgets/button.rs");

    let first = resolve(BASE_COMMAND, fixture.path(), path);
    let second = resolve(BASE_COMMAND, fixture.path(), path);
    assert_eq!(first, second);
}

#[test]
fn test_manifest_edits_are_picked_up_without_restart() {
    let fixture = workspace_fixture();
    let root = fixture.path();
    let path = Path::new("crates/demo/src/widgets/button.rs");

    assert_eq!(
        resolve(BASE_COMMAND, root, path),
        "cargo run -p demo --bin preview"
    );

    // Rename the package; the next resolution must see the new name.
    fs::write(
        root.join("crates/demo/Cargo.toml"),
        "[package]\nname = \"renamed\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();

    assert_eq!(
        resolve(BASE_COMMAND, root, path),
        "cargo run -p renamed --bin preview"
    );
}
