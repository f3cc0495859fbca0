use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is unset or unparsable. Request spans from
/// `TraceLayer` are emitted at debug level under `tower_http`.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Build the filter from a `RUST_LOG`-style directive string, falling back
/// to [`DEFAULT_LOG_FILTER`].
pub fn resolve_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global compact subscriber.
///
/// Call once at startup (in main.rs), after `.env` has been loaded so a
/// `RUST_LOG` set there takes effect.
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(directives.as_deref());
    let effective = filter.to_string();

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Logging initialized ({})", effective);
}
