//! Logging setup.
//!
//! Filter priority:
//!
//! 1. **`LIVEMARK_LOG`** - Livemark-specific filter directives
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for this crate

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "LIVEMARK_LOG";
const DEFAULT_FILTER: &str = "warn,livemark=info";

/// Install the global subscriber. Safe to call more than once; a failure
/// to install is reported on stderr and otherwise ignored.
pub fn init() {
    let filter = create_filter(env::var(LOG_ENV).ok(), env::var("RUST_LOG").ok());

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if let Err(e) = result {
        eprintln!("Logging already initialised: {}", e);
    }
}

/// Build the filter from the two environment values, falling back to the
/// default when neither is set or parses.
fn create_filter(livemark_log: Option<String>, rust_log: Option<String>) -> EnvFilter {
    for directives in [livemark_log, rust_log].into_iter().flatten() {
        match EnvFilter::try_new(&directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid log filter {:?}: {}", directives, e),
        }
    }
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = create_filter(None, None);
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }

    #[test]
    fn test_livemark_log_wins() {
        let filter = create_filter(Some("debug".into()), Some("error".into()));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_rust_log_fallback() {
        let filter = create_filter(None, Some("trace".into()));
        assert_eq!(filter.to_string(), "trace");
    }
}
