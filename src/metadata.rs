use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use toml::Table;

/// Which metadata convention a `pyproject.toml` declares its project under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `[project]` table
    Pep621,
    /// `[tool.poetry]` table
    Poetry,
}

/// The table holding a project's declared metadata
#[derive(Debug, Clone, Copy)]
pub struct MetadataBase<'a> {
    pub dialect: Dialect,
    pub table: &'a Table,
}

impl MetadataBase<'_> {
    /// `classifiers` list, if declared
    pub fn classifiers(&self) -> Result<Option<Vec<String>>> {
        self.string_list("classifiers")
    }

    /// `license-files` glob patterns, empty when not declared
    pub fn license_files(&self) -> Result<Vec<String>> {
        Ok(self.string_list("license-files")?.unwrap_or_default())
    }

    fn string_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        self.table
            .get(key)
            .cloned()
            .map(|value| value.try_into::<Vec<String>>())
            .transpose()
            .with_context(|| format!("`{}` must be a list of strings", key))
    }
}

/// Read and parse a TOML file into a document table
pub fn load_document(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse {} as TOML", path.display()))
}

/// Locate the project metadata table.
///
/// Two conventions are supported, checked in order:
///   * PEP 621: a top-level `project` table
///   * Poetry: a `tool.poetry` table
///
/// A present `project` key always wins, even when it isn't a table. Documents
/// declaring neither yield `None`, which callers treat as nothing to check.
pub fn extract_metadata_base(document: &Table) -> Option<MetadataBase<'_>> {
    if let Some(project) = document.get("project") {
        return project.as_table().map(|table| MetadataBase {
            dialect: Dialect::Pep621,
            table,
        });
    }

    document
        .get("tool")
        .and_then(|tool| tool.get("poetry"))
        .and_then(|poetry| poetry.as_table())
        .map(|table| MetadataBase {
            dialect: Dialect::Poetry,
            table,
        })
}

/// `license-files` globs of an already parsed document
pub fn license_globs(document: &Table) -> Result<Vec<String>> {
    match extract_metadata_base(document) {
        Some(base) => base.license_files(),
        None => Ok(Vec::new()),
    }
}

/// `license-files` globs declared by the TOML file at `path`
pub fn get_license_globs(path: &Path) -> Result<Vec<String>> {
    let document = load_document(path)?;
    license_globs(&document)
        .with_context(|| format!("Invalid project metadata in {}", path.display()))
}
