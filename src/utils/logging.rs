use tracing::Level;

/// Installs the global `fmt` subscriber at `level`.
///
/// Returns `false` when a subscriber was already installed, which happens when
/// the host application or another test configured logging first.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
