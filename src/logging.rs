// src/logging.rs
use log::info;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Safe to call more than once; only the first call configures env_logger.
/// `RUST_LOG` overrides the defaults.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("diario_cultural", log::LevelFilter::Debug)
            .parse_default_env()
            .format_timestamp_secs()
            .format_target(false)
            .init();

        info!("Logging system initialized");
    });
}
