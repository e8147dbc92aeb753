//! Logging setup for binaries, benches and tests using graphpc.
//!
//! The library itself only emits `tracing` events; nothing is printed until
//! a subscriber is installed. The default level is INFO, overridable with
//! `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=graphpc=debug cargo bench
//! ```

use tracing::Level;

/// Install the standard fmt subscriber at INFO.
pub fn init_logger() {
    init_logger_with_level(Level::INFO)
}

/// Install the standard fmt subscriber with a custom default level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger_with_level(default_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .try_init();
}

/// Like [`init_logger_with_level`], but writes through libtest's captured
/// output so events only show for failing tests (or with `--nocapture`).
pub fn init_test_logger(default_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: Level) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}
