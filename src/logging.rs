// src/logging.rs
use env_logger::Env;

/// Logs a completed step under the `SUCCESS` target.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::log::info!(target: "SUCCESS", $($arg)*);
    };
}

/// Routes `log` records to stderr. `RUST_LOG` overrides the default `warn`
/// filter. Calling it twice is harmless.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
