//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable, e.g. `RUST_LOG=holoblock=debug`
/// to see per-frame renderer status lines.
///
/// # Example
/// ```
/// holoblock::core::logging::init();
/// log::info!("Session starting");
/// ```
pub fn init() {
    // try_init so doc tests and repeated calls don't panic
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).try_init();
}
