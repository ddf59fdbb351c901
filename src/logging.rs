use crate::types::LogLevel;

/// Installs a `fmt` subscriber at `level` for binaries embedding the client.
///
/// Returns `false` when a global subscriber was already set; the existing one
/// is kept.
pub fn init_tracing(level: LogLevel) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_target(true)
        .try_init()
        .is_ok()
}
