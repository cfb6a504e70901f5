//! Subscriber setup shared by the binaries.

use tracing::Level;

/// Installs a `fmt` subscriber writing to stderr.
///
/// Records at `DEBUG` and above are shown with `verbose`, `INFO` and above
/// without.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
