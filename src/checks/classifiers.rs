use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use toml::Table;
use tracing::debug;

use super::{Check, CheckKind, Violation};
use crate::metadata::{extract_metadata_base, load_document};
use crate::runner::run_check;

pub const LICENSE_CLASSIFIER_PREFIX: &str = "License ::";

pub struct ClassifierCheck;

/// Classifiers in the project metadata starting with `License ::`.
///
/// Missing metadata tables and missing or empty `classifiers` lists yield
/// nothing. The prefix match is case-sensitive.
pub fn license_classifiers(document: &Table) -> Result<Vec<String>> {
    let Some(base) = extract_metadata_base(document) else {
        debug!("no supported metadata table, skipping classifier check");
        return Ok(Vec::new());
    };

    let classifiers = base.classifiers()?.unwrap_or_default();
    debug!(dialect = ?base.dialect, count = classifiers.len(), "checking classifiers");

    Ok(classifiers
        .into_iter()
        .filter(|c| c.starts_with(LICENSE_CLASSIFIER_PREFIX))
        .collect())
}

/// Library entry point: `License ::` classifiers declared by the file at
/// `path`. An empty result means the file passes.
pub fn find_license_classifiers(path: &Path) -> Result<Vec<String>> {
    let document = load_document(path)?;
    license_classifiers(&document)
        .with_context(|| format!("Invalid project metadata in {}", path.display()))
}

impl Check for ClassifierCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Classifiers
    }

    fn evaluate(&self, path: &Path, document: &Table) -> Result<Vec<Violation>> {
        let found = license_classifiers(document)
            .with_context(|| format!("Invalid project metadata in {}", path.display()))?;

        Ok(found
            .into_iter()
            .map(|classifier| Violation::LicenseClassifier { classifier })
            .collect())
    }
}

/// Run this check on one file, reporting to `out`.
///
/// Library entry point for a single check. Rendering goes through
/// [`run_check`], the same path the command line uses.
///
/// Returns `true` when a license classifier was found.
pub fn check_file<W: Write>(path: &Path, out: &mut W) -> Result<bool> {
    run_check(path, CheckKind::Classifiers, out)
}
