use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::io::Write;
use std::path::{Path, PathBuf};
use toml::Table;
use tracing::debug;

use super::{Check, CheckKind, Violation};
use crate::metadata::license_globs;
use crate::runner::run_check;

pub struct GlobResolveCheck;

/// Directory that `license-files` globs are resolved against.
///
/// Per PEP 639 this is the directory containing `pyproject.toml`, not the
/// working directory.
pub fn base_dir(toml_file: &Path) -> PathBuf {
    match toml_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Whether `pattern` matches at least one filesystem entry under `base_dir`.
///
/// Fails when `base_dir` is not valid UTF-8, since it cannot be spelled as a
/// glob prefix without changing which directory is searched.
pub fn glob_has_match(pattern: &str, base_dir: &Path) -> Result<bool> {
    let base = base_dir.to_str().with_context(|| {
        format!(
            "Cannot resolve license globs under non UTF-8 directory {}",
            base_dir.display()
        )
    })?;
    let rooted = format!("{}/{}", Pattern::escape(base), pattern);

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    match glob::glob_with(&rooted, options) {
        Ok(mut paths) => Ok(paths.any(|entry| entry.is_ok())),
        Err(e) => {
            debug!(pattern, error = %e, "invalid glob pattern");
            Ok(false)
        }
    }
}

/// Globs from `globs` with no match under `base_dir`, in declaration order
pub fn unmatched_globs(globs: &[String], base_dir: &Path) -> Result<Vec<String>> {
    let mut unmatched = Vec::new();
    for glob in globs {
        if !glob_has_match(glob, base_dir)? {
            unmatched.push(glob.clone());
        }
    }
    Ok(unmatched)
}

impl Check for GlobResolveCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::GlobResolve
    }

    fn evaluate(&self, path: &Path, document: &Table) -> Result<Vec<Violation>> {
        let globs = license_globs(document)
            .with_context(|| format!("Invalid project metadata in {}", path.display()))?;
        if globs.is_empty() {
            return Ok(Vec::new());
        }

        let base_dir = base_dir(path);
        debug!(base_dir = %base_dir.display(), count = globs.len(), "resolving license globs");

        Ok(unmatched_globs(&globs, &base_dir)?
            .into_iter()
            .map(|glob| Violation::UnmatchedGlob { glob })
            .collect())
    }
}

/// Run this check on one file, reporting to `out`.
///
/// Library entry point for a single check. Rendering goes through
/// [`run_check`], the same path the command line uses.
///
/// Returns `true` when at least one glob matched nothing.
pub fn check_file<W: Write>(path: &Path, out: &mut W) -> Result<bool> {
    run_check(path, CheckKind::GlobResolve, out)
}
