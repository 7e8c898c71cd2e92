use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "fintrack_core=info";

/// Installs the global tracing subscriber. Honors `RUST_LOG`; falls back
/// to info-level output for this crate.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive(DEFAULT_DIRECTIVE.parse().expect("static directive"));

        fmt().with_env_filter(filter).init();
    });
}
