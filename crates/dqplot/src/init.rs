//! Logging setup for dqplot-rs.
//!
//! dqplot logs through the `log` facade. Applications that already install a
//! logger need nothing from here; everyone else can call [`init_logging`].

/// Installs an `env_logger` configured from `RUST_LOG`.
///
/// Returns `false` when a logger was already installed. Safe to call more
/// than once.
pub fn init_logging() -> bool {
    let installed = env_logger::try_init().is_ok();
    if installed {
        log::info!("dqplot-rs logging initialized");
    }
    installed
}

/// Installs an `env_logger` with an explicit filter such as `"dqplot=debug"`.
///
/// Returns `false` when a logger was already installed.
pub fn init_logging_with_filter(filter: &str) -> bool {
    let installed = env_logger::Builder::new()
        .parse_filters(filter)
        .try_init()
        .is_ok();
    if installed {
        log::info!("dqplot-rs logging initialized with filter '{filter}'");
    }
    installed
}
