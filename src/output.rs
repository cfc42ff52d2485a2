use std::io::{self, Write};
use std::path::Path;

use crate::checks::{CheckKind, Violation};

/// Write the diagnostics for one file.
///
/// Nothing is written when `violations` is empty. The classifier rule
/// reports a single line naming the file; the glob rules print the file
/// path followed by one indented line per violation.
pub fn write_report<W: Write>(
    out: &mut W,
    path: &Path,
    kind: CheckKind,
    violations: &[Violation],
) -> io::Result<()> {
    if violations.is_empty() {
        return Ok(());
    }

    match kind {
        CheckKind::Classifiers => {
            writeln!(out, "{}: License classifier found in project metadata", path.display())
        }
        CheckKind::GlobResolve | CheckKind::GlobSyntax => {
            writeln!(out, "{}", path.display())?;
            for violation in violations {
                writeln!(out, "    {}", violation)?;
            }
            Ok(())
        }
    }
}

/// Render one file's report to a string
pub fn format_report(path: &Path, kind: CheckKind, violations: &[Violation]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_report(&mut buffer, path, kind, violations);
    String::from_utf8_lossy(&buffer).into_owned()
}
