use regex::Regex;
use std::sync::LazyLock;

use crate::types::AnnotationKind;

/// `#[snowscape::preview]`, optionally with an empty parameter list
static STATELESS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\[snowscape::preview(\(\s*\))?\]\s*$").unwrap());

/// `#[snowscape::preview(<payload>)]` closing on the same line
static STATEFUL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\[snowscape::preview\((.+)\)\]\s*$").unwrap());

/// Classify a single line as a preview marker, if it is one.
///
/// Markers are single-line only: a payload that spills onto the next
/// line fails both patterns and is not recognized. A payload with
/// unbalanced parentheses is rejected outright rather than partially
/// matched.
pub(crate) fn classify_marker(line: &str) -> Option<AnnotationKind> {
    if STATELESS_MARKER.is_match(line) {
        return Some(AnnotationKind::Stateless);
    }
    if let Some(captures) = STATEFUL_MARKER.captures(line) {
        let payload = captures.get(1).map_or("", |m| m.as_str());
        if payload.trim().is_empty() || !parens_balanced(payload) {
            return None;
        }
        return Some(AnnotationKind::Stateful);
    }
    None
}

fn parens_balanced(payload: &str) -> bool {
    let mut depth: i32 = 0;
    for ch in payload.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
