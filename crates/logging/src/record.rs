//! crates/logging/src/record.rs
//! Record line rendering.

use std::fmt;

use crate::severity::Severity;

/// Reduces a captured source path to its basename.
///
/// Cosmetic only: it keeps record lines short, it is not a path-safety
/// mechanism. Both separator styles are stripped because `file!()` spells
/// paths differently per host.
pub(crate) fn basename(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

/// Renders one record into its line form:
///
/// ```text
/// <timestamp> <tag> <basename>:<line>| <message>
/// ```
///
/// terminated by exactly one newline, with the line number left-justified to
/// width 4. Rendering cannot fail observably; a malformed message degrades
/// output, nothing else.
pub(crate) fn render_line(
    stamp: &str,
    severity: Severity,
    file: &str,
    line: u32,
    message: fmt::Arguments<'_>,
) -> String {
    format!(
        "{stamp} {} {}:{line:<4}| {message}\n",
        severity.tag(),
        basename(file)
    )
}
