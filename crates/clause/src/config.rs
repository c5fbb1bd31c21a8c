//! Process-level configuration: log filter and match tracing.
//!
//! # Environment Variables
//!
//! - `CLAUSE_LOG`: `tracing` filter directives (falls back to `RUST_LOG`).
//!   Without one, no subscriber is installed.
//! - `CLAUSE_TRACE`: turns on per-invocation match tracing when set to
//!   anything but empty, `0` or `false`. Trace lines are `info` events under
//!   the `clause_patterns::trace` target.

use std::sync::Once;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;

static TRACING_INIT: Once = Once::new();

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Filter directives, e.g. `clause_dispatch=debug`.
    pub log_filter: Option<String>,
    /// Emit a before/after line for every pattern invocation.
    pub trace_matches: bool,
}

impl Config {
    /// Read `CLAUSE_LOG`, `RUST_LOG` and `CLAUSE_TRACE`.
    pub fn from_env() -> Self {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("CLAUSE_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty());
        let trace_matches = lookup("CLAUSE_TRACE").is_some_and(|v| is_truthy(&v));
        Config {
            log_filter,
            trace_matches,
        }
    }

    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_trace_matches(mut self, enabled: bool) -> Self {
        self.trace_matches = enabled;
        self
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid log filter `{filter}`")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },

    #[error("a global tracing subscriber is already installed")]
    SubscriberInstalled(#[from] TryInitError),
}

/// Apply `config` to the process.
///
/// The match-trace toggle is set on every call. The subscriber (registry,
/// filter and hierarchical layer) is installed at most once, and only when a
/// filter is configured.
pub fn init(config: &Config) -> Result<(), InitError> {
    use tracing_subscriber::{prelude::*, EnvFilter};

    clause_patterns::set_trace(config.trace_matches);

    let Some(directives) = config.log_filter.as_deref() else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(directives).map_err(|source| InitError::InvalidFilter {
        filter: directives.to_string(),
        source,
    })?;

    let mut result = Ok(());
    TRACING_INIT.call_once(|| {
        result = tracing_subscriber::registry()
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .with(filter)
            .try_init()
            .map_err(InitError::from);
        if result.is_ok() {
            tracing::debug!(filter = directives, "tracing subscriber installed");
        }
    });
    result
}
