//! Opt-in tracing of every pattern invocation.
//!
//! When the process-wide toggle is on, each `match_value` call emits a line
//! before matching (`-- [tag] [kind] args: subject`) and one after
//! (`-- [tag] [kind] --> results`) as `tracing` events under the
//! `clause_patterns::trace` target. The tag is a per-invocation counter so
//! the two lines of one call pair up even when calls nest. Tracing never
//! changes what a match returns.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use clause_value::Value;

use crate::pattern::Pattern;
use crate::result::{MatchResult, MatchResults};

static TRACE: AtomicBool = AtomicBool::new(false);
static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// Turn invocation tracing on or off for the whole process.
pub fn set_trace(enabled: bool) {
    TRACE.store(enabled, Ordering::Relaxed);
}

/// Whether invocation tracing is on.
#[inline]
pub fn trace_enabled() -> bool {
    TRACE.load(Ordering::Relaxed)
}

struct ResultList<'a, 'p>(&'a [MatchResult<'p>]);

impl fmt::Display for ResultList<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, result) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{result}")?;
        }
        write!(f, "]")
    }
}

pub(crate) fn traced<'p>(
    pattern: &'p Pattern,
    value: &Value,
    run: impl FnOnce() -> MatchResults<'p>,
) -> MatchResults<'p> {
    let tag = NEXT_TAG.fetch_add(1, Ordering::Relaxed);
    let kind = pattern.kind_name();
    tracing::info!(target: "clause_patterns::trace", "-- [{tag}] [{kind}] args: {value}");
    let results = run();
    tracing::info!(
        target: "clause_patterns::trace",
        "-- [{tag}] [{kind}] --> {}",
        ResultList(&results)
    );
    results
}

#[cfg(test)]
mod tests;
