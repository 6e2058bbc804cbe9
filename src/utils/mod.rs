pub mod calendar;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "payday_forecast=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` wins when set; otherwise only this crate's `info` events are shown.
/// A subscriber installed earlier by the host application is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
