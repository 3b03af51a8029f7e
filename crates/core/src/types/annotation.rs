use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a preview marker, decided purely by the surface
/// syntax of the attribute line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    /// `#[snowscape::preview]`, optionally with an empty parameter list.
    Stateless,
    /// `#[snowscape::preview(...)]` with a non-empty payload.
    Stateful,
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationKind::Stateless => write!(f, "stateless"),
            AnnotationKind::Stateful => write!(f, "stateful"),
        }
    }
}
