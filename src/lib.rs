pub mod checks;
pub mod logging;
pub mod metadata;
pub mod output;
pub mod runner;

// Re-export main types for easy access
pub use checks::{Check, CheckKind, Violation};
pub use metadata::{extract_metadata_base, get_license_globs, Dialect, MetadataBase};
pub use runner::{check_path, check_paths, run_check, FileOutcome};
