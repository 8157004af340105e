//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Safe to call more than once; later calls are no-ops. Tests call this
/// freely without worrying about double initialization.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
