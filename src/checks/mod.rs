use anyhow::Result;
use std::fmt;
use std::path::Path;
use toml::Table;

pub mod classifiers;
pub mod glob_resolve;
pub mod glob_syntax;

pub use classifiers::ClassifierCheck;
pub use glob_resolve::GlobResolveCheck;
pub use glob_syntax::GlobSyntaxCheck;

/// The license rules a `pyproject.toml` can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Classifiers,
    GlobResolve,
    GlobSyntax,
}

impl CheckKind {
    pub const ALL: [CheckKind; 3] = [
        CheckKind::Classifiers,
        CheckKind::GlobResolve,
        CheckKind::GlobSyntax,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Classifiers => "classifiers",
            CheckKind::GlobResolve => "glob-resolve",
            CheckKind::GlobSyntax => "glob-syntax",
        }
    }

    pub fn check(self) -> &'static dyn Check {
        match self {
            CheckKind::Classifiers => &ClassifierCheck,
            CheckKind::GlobResolve => &GlobResolveCheck,
            CheckKind::GlobSyntax => &GlobSyntaxCheck,
        }
    }
}

/// A single finding against one `pyproject.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    LicenseClassifier { classifier: String },
    UnmatchedGlob { glob: String },
    BackslashInGlob { glob: String },
    ParentDirectoryInGlob { glob: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LicenseClassifier { classifier } => {
                write!(f, "License classifier: '{}'", classifier)
            }
            Violation::UnmatchedGlob { glob } => write!(f, "Unmatched glob: '{}'", glob),
            // Wording kept from the pre-commit hook this tool replaces
            Violation::BackslashInGlob { glob } => {
                write!(f, "Forward slash character in glob: '{}'", glob)
            }
            Violation::ParentDirectoryInGlob { glob } => {
                write!(f, "Parent directory indicator in glob: '{}'", glob)
            }
        }
    }
}

pub trait Check: Sync {
    fn kind(&self) -> CheckKind;

    /// Evaluate an already parsed document. `path` locates the file on disk
    /// for checks that resolve relative paths.
    fn evaluate(&self, path: &Path, document: &Table) -> Result<Vec<Violation>>;

    fn evaluate_file(&self, path: &Path) -> Result<Vec<Violation>> {
        let document = crate::metadata::load_document(path)?;
        self.evaluate(path, &document)
    }
}
