// tests/common/mod.rs

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

static INIT: Once = Once::new();

/// Install a test subscriber if `EGRESS_LOG` is set.
///
/// `EGRESS_LOG_STYLE=full` adds span open/close events.
pub fn init_tracing() {
    INIT.call_once(|| {
        let Ok(filter) = EnvFilter::try_from_env("EGRESS_LOG") else {
            return;
        };
        let spans = if std::env::var("EGRESS_LOG_STYLE").as_deref() == Ok("full") {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_span_events(spans)
            .with_test_writer()
            .try_init();
    });
}
