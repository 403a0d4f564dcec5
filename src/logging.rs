use std::sync::Once;

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger, filtered by `RUST_LOG` or, if
/// that isn't set, at info level. Only the first call has any effect.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => builder.parse_filters(&filter),
            Err(_) => builder.filter_level(log::LevelFilter::Info),
        };
        // Another logger may already be installed, e.g. by a test harness.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
