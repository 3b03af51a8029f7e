//! Cargo manifest interrogation.
//!
//! Manifests are read with a tolerant text scan rather than a full TOML
//! parse: a file that is malformed elsewhere still yields its package
//! name, and any failure just means "no manifest here". Nothing is
//! cached — manifests can change between invocations and a stale name
//! would misroute the launch command.

mod locator;
mod project_root;

pub use locator::{find_enclosing_package, has_workspace_section, package_name};
pub use project_root::find_project_root;
