use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::error;

use pep639_check::{check_paths, CheckKind};

/// Run `kinds` over `files`, printing reports in argument order.
///
/// Returns `true` when any file had a violation or could not be checked.
pub fn handle_check(kinds: &[CheckKind], files: &[PathBuf]) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut failed = false;
    for (path, outcome) in check_paths(files, kinds) {
        match outcome {
            Ok(outcome) => {
                out.write_all(outcome.output.as_bytes())?;
                for e in &outcome.errors {
                    error!("{}: {:#}", path.display(), e);
                }
                failed |= outcome.failed;
            }
            Err(e) => {
                error!("{}: {:#}", path.display(), e);
                failed = true;
            }
        }
    }
    out.flush()?;

    Ok(failed)
}
