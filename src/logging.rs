//! Diagnostic logging setup
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job. The filter comes from `FINANCE_TRACKER_LOG` using the usual
//! `EnvFilter` directive syntax and falls back to `warn`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FINANCE_TRACKER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build a filter from a directive string, falling back to the default
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr subscriber filtered by `FINANCE_TRACKER_LOG`
///
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let directives = std::env::var(LOG_ENV).ok();

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter_from(directives.as_deref())),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(filter_from(None).to_string(), "warn");
        assert_eq!(filter_from(Some("  ")).to_string(), "warn");
    }

    #[test]
    fn test_custom_filter() {
        assert_eq!(
            filter_from(Some("finance_tracker=debug")).to_string(),
            "finance_tracker=debug"
        );
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        assert_eq!(filter_from(Some("finance_tracker=loud")).to_string(), "warn");
    }
}
