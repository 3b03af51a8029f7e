use regex::Regex;
use std::sync::LazyLock;

/// Declaration forms: optional visibility qualifier (including
/// `pub(...)` restrictions) and optional `async`, then `fn <ident>`.
static FN_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?fn\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap()
});

/// Extract the declared function name if the line begins a declaration.
pub(crate) fn declared_function(line: &str) -> Option<&str> {
    FN_DECLARATION
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Lines the marker lookahead steps over: blank lines, other attribute
/// lines, and line comments (incl. doc comments).
pub(crate) fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("#[") || trimmed.starts_with("//")
}
