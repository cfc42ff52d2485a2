use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::io::Write;
use std::path::Path;
use toml::Table;

use super::{Check, CheckKind, Violation};
use crate::metadata::license_globs;
use crate::runner::run_check;

pub struct GlobSyntaxCheck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxIssue {
    /// `\` used as a path delimiter
    Backslash,
    /// `..` in the pattern
    ParentDirectory,
}

/// Issues found in a single glob, backslash before parent directory
pub fn glob_issues(glob: &str) -> Vec<SyntaxIssue> {
    let mut issues = Vec::new();
    if glob.contains('\\') {
        issues.push(SyntaxIssue::Backslash);
    }
    if glob.contains("..") {
        issues.push(SyntaxIssue::ParentDirectory);
    }
    issues
}

/// Syntax issues per glob, keyed in first-seen order.
///
/// Only globs with at least one issue are present. A glob listed twice
/// accumulates its issues under one key.
pub fn find_syntax_issues(globs: &[String]) -> IndexMap<&str, Vec<SyntaxIssue>> {
    let mut issues: IndexMap<&str, Vec<SyntaxIssue>> = IndexMap::new();
    for glob in globs {
        let found = glob_issues(glob);
        if !found.is_empty() {
            issues.entry(glob.as_str()).or_default().extend(found);
        }
    }
    issues
}

impl Check for GlobSyntaxCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::GlobSyntax
    }

    fn evaluate(&self, path: &Path, document: &Table) -> Result<Vec<Violation>> {
        let globs = license_globs(document)
            .with_context(|| format!("Invalid project metadata in {}", path.display()))?;

        let violations = find_syntax_issues(&globs)
            .into_iter()
            .flat_map(|(glob, issues)| {
                issues.into_iter().map(move |issue| match issue {
                    SyntaxIssue::Backslash => Violation::BackslashInGlob {
                        glob: glob.to_string(),
                    },
                    SyntaxIssue::ParentDirectory => Violation::ParentDirectoryInGlob {
                        glob: glob.to_string(),
                    },
                })
            })
            .collect();

        Ok(violations)
    }
}

/// Run this check on one file, reporting to `out`.
///
/// Library entry point for a single check. Rendering goes through
/// [`run_check`], the same path the command line uses.
///
/// Returns `true` when any glob uses a disallowed form.
pub fn check_file<W: Write>(path: &Path, out: &mut W) -> Result<bool> {
    run_check(path, CheckKind::GlobSyntax, out)
}
