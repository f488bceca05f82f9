//! Human-readable issue reports.

use crate::error::Issue;
use crate::path::dot_path;

/// Renders issues as a multi-line report.
///
/// Each issue produces a `× message` line, followed by an indented
/// `→ at path` line when its path renders as a non-empty dot path. Lines are
/// separated by newlines with no trailing newline; no issues yield an empty
/// string.
///
/// # Example
///
/// ```rust
/// use standard_schema::{summarize, Issue, IssuePath};
///
/// let issues = vec![
///     Issue::new("Invalid type: Expected object"),
///     Issue::at(IssuePath::root().push_field("dot").push_index(0), "Too short"),
/// ];
///
/// assert_eq!(
///     summarize(&issues),
///     "× Invalid type: Expected object\n× Too short\n  → at dot.0"
/// );
/// ```
pub fn summarize<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> String {
    let mut lines = Vec::new();
    for issue in issues {
        lines.push(format!("× {}", issue.message));
        if let Some(path) = dot_path(issue).filter(|path| !path.is_empty()) {
            lines.push(format!("  → at {}", path));
        }
    }
    lines.join("\n")
}
