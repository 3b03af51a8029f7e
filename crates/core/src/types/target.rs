use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::annotation::AnnotationKind;

/// A detected previewable function, ready to be turned into a launch
/// command on activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewTarget {
    pub function_name: String,
    pub kind: AnnotationKind,
    pub file_path: PathBuf,
    /// Zero-based line of the function declaration, not the marker line.
    /// The visible trigger sits on the code being previewed.
    pub line: usize,
}

impl PreviewTarget {
    /// Identity used to dedup stacked markers within a single scan.
    pub fn identity(&self) -> (usize, &str) {
        (self.line, self.function_name.as_str())
    }

    /// Human-readable label for host UIs.
    pub fn label(&self) -> String {
        format!("Preview '{}'", self.function_name)
    }
}
