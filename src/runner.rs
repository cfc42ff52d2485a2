use anyhow::Result;
use rayon::prelude::*;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::checks::CheckKind;
use crate::metadata::load_document;
use crate::output::format_report;

/// Result of running one or more checks on a single file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Rendered diagnostics, empty when the file is clean
    pub output: String,
    pub failed: bool,
    /// Checks that could not run, e.g. on a malformed field. The other
    /// checks still report.
    pub errors: Vec<anyhow::Error>,
}

/// Drop `.` components, so `./pyproject.toml` reports as `pyproject.toml`
pub fn normalize_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        normalized
    }
}

/// Run `kinds` against one file, parsing it once.
///
/// Reports are concatenated in the order of `kinds`. Only a file that
/// cannot be read or parsed is an `Err`; a check failing on its own field
/// is recorded in [`FileOutcome::errors`].
pub fn check_path(path: &Path, kinds: &[CheckKind]) -> Result<FileOutcome> {
    let path = normalize_path(path);
    let document = load_document(&path)?;

    let mut output = String::new();
    let mut failed = false;
    let mut errors = Vec::new();
    for kind in kinds {
        let check = kind.check();
        let violations = match check.evaluate(&path, &document) {
            Ok(violations) => violations,
            Err(e) => {
                errors.push(e);
                failed = true;
                continue;
            }
        };
        debug!(
            file = %path.display(),
            check = check.kind().name(),
            violations = violations.len(),
            "check finished"
        );
        for violation in &violations {
            debug!(file = %path.display(), "{}", violation);
        }

        failed |= !violations.is_empty();
        output.push_str(&format_report(&path, check.kind(), &violations));
    }

    Ok(FileOutcome {
        path,
        output,
        failed,
        errors,
    })
}

/// Check every file, in parallel, returning outcomes in input order
pub fn check_paths(
    files: &[PathBuf],
    kinds: &[CheckKind],
) -> Vec<(PathBuf, Result<FileOutcome>)> {
    files
        .par_iter()
        .map(|path| (normalize_path(path), check_path(path, kinds)))
        .collect()
}

/// Run a single check on one file and write its report to `out`.
///
/// Unlike [`check_path`], a check that cannot run is returned as the error.
pub fn run_check<W: Write>(path: &Path, kind: CheckKind, out: &mut W) -> Result<bool> {
    let mut outcome = check_path(path, &[kind])?;
    if let Some(e) = outcome.errors.pop() {
        return Err(e);
    }

    out.write_all(outcome.output.as_bytes())?;
    Ok(outcome.failed)
}
