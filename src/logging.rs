use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// Logs describe the run itself; violation reports go to stdout.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    // A second init keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
