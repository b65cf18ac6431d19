//! Logging utilities and structured logging support

use std::sync::Once;

pub use log::{debug, info, warn, error, trace};

static INIT: Once = Once::new();

/// Initialize the logging system with an explicit `env_logger` filter
///
/// The filter uses `env_logger` syntax (e.g. `"debug"` or
/// `"tesser_engine=trace,tesser_app=info"`). `RUST_LOG` takes precedence
/// when no filter is given. Later calls are ignored.
pub fn init_with_filter(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match (filter, std::env::var("RUST_LOG")) {
            (Some(filter), _) => {
                builder.parse_filters(filter);
            }
            (None, Ok(env_filter)) => {
                builder.parse_filters(&env_filter);
            }
            (None, Err(_)) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        // Tests may install their own logger first
        if builder.try_init().is_ok() {
            debug!("logging initialized");
        }
    });
}
