//! Line-based detection of preview markers.
//!
//! The scanner deliberately stops short of parsing Rust: it has to keep
//! working while the user is mid-edit and the file does not parse, so
//! it stays a line-pattern matcher with a bounded lookahead. Known
//! limitation: markers are recognized on a single line only; attribute
//! payloads wrapped across lines are not supported.

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::types::PreviewTarget;

mod declaration;
mod marker;

/// Scan one document for preview-annotated functions.
///
/// Returns one target per function in ascending declaration-line order,
/// regardless of how many markers are stacked above it; the kind of the
/// topmost stacked marker wins. A marker with no function declaration
/// following it is silently skipped. Pure function of the source text.
pub fn scan_source(source: &str, file_path: &Path) -> Vec<PreviewTarget> {
    let lines: Vec<&str> = source.lines().collect();
    let mut seen: HashSet<(usize, String)> = HashSet::new();
    let mut targets = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(kind) = marker::classify_marker(line) else {
            continue;
        };
        match find_declaration(&lines, index + 1) {
            Some((declaration_line, name)) => {
                if !seen.insert((declaration_line, name.to_string())) {
                    debug!(
                        "Stacked marker at line {}: '{}' already emitted",
                        index, name
                    );
                    continue;
                }
                debug!(
                    "Detected {} preview '{}' declared at line {}",
                    kind, name, declaration_line
                );
                targets.push(PreviewTarget {
                    function_name: name.to_string(),
                    kind,
                    file_path: file_path.to_path_buf(),
                    line: declaration_line,
                });
            }
            None => {
                debug!("Marker at line {} has no following fn declaration", index);
            }
        }
    }

    targets
}

/// Walk forward from `start`, skipping blank, attribute, and comment
/// lines, until the first function declaration. Any other construct
/// ends the lookahead with no match.
fn find_declaration<'a>(lines: &[&'a str], start: usize) -> Option<(usize, &'a str)> {
    for (offset, line) in lines[start..].iter().enumerate() {
        if let Some(name) = declaration::declared_function(line) {
            return Some((start + offset, name));
        }
        if !declaration::is_skippable(line) {
            return None;
        }
    }
    None
}
