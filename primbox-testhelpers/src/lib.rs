#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use primbox_testhelpers_macros::test;

use std::sync::Once;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a `Targets` filter, e.g. `primbox_core=debug`.
pub const LOG_ENV: &str = "PRIMBOX_LOG";

/// Parse a `Targets` directive string, falling back to `trace` for everything.
fn parse_filter(directives: Option<&str>) -> Targets {
    directives
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE))
}

/// Install the global tracing subscriber, once per process.
///
/// Safe to call from every test; later calls are no-ops. A subscriber
/// installed by someone else first is left alone.
pub fn setup() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).ok();
        let filter = parse_filter(directives.as_deref());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_timer(Uptime::default())
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(fmt_layer)
            .with(filter)
            .try_init();
    });
}
