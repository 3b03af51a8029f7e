//! snowscape-runner - detect previewable functions and resolve their launch commands
//!
//! This crate provides functionality to:
//! - Scan Rust source text for `#[snowscape::preview]` annotations and
//!   produce one action target per annotated function
//! - Resolve the enclosing workspace package for a file and scope the
//!   configured launch command to it
//! - Assemble the final invocation for either parameter-passing
//!   convention (positional flag or environment prefix)
pub mod command;
pub mod config;
pub mod error;
pub mod manifest;
pub mod scanner;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{Invocation, PREVIEW_ENV_VAR, dispatch, resolve};
pub use config::RunnerConfig;
pub use scanner::scan_source;
