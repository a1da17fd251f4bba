//! Logging utilities and structured logging support
//!
//! The spatial core only emits through the `log` facade. Hosts pick the
//! backend; `init` wires up `env_logger` for servers and tools that have none.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let _ = env_logger::builder().format_timestamp_millis().try_init();
}

/// Initialize logging for unit tests (output captured by the test harness)
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
