//! Per-identity clause lists.
//!
//! Every identity owns an ordered list of clauses. The list is created on
//! the first registration for that identity, seeded with a permanent
//! fallback whose pattern accepts any call. New clauses go to the front, so
//! the most recently registered clause is tried first and the fallback is
//! always tried last. Resolution therefore always finds a clause for a
//! known identity; exhaustion shows up as the fallback being selected.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::sync::Arc;

use clause_patterns::{call_subject, Pattern};
use clause_value::Value;
use rustc_hash::FxHashMap;

use crate::bindings::Bindings;
use crate::error::DispatchError;
use crate::handler::ClauseHandler;

/// What runs when a clause is selected.
#[derive(Clone)]
pub enum ClauseKind {
    User(Arc<dyn ClauseHandler>),
    /// The permanent last clause; selecting it means no user clause matched.
    Fallback,
}

impl ClauseKind {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ClauseKind::Fallback)
    }
}

impl fmt::Debug for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseKind::User(_) => write!(f, "User(<handler>)"),
            ClauseKind::Fallback => write!(f, "Fallback"),
        }
    }
}

/// A handler paired with the argument group it is selected by.
#[derive(Clone, Debug)]
pub struct ClauseEntry {
    kind: ClauseKind,
    pattern: Pattern,
}

impl ClauseEntry {
    /// A user clause. A pattern that is not already an argument group is
    /// wrapped in one so that its variables are collected.
    pub fn new(pattern: Pattern, handler: Arc<dyn ClauseHandler>) -> Self {
        let pattern = match pattern {
            Pattern::Args(_) => pattern,
            other => Pattern::args(other),
        };
        ClauseEntry {
            kind: ClauseKind::User(handler),
            pattern,
        }
    }

    fn fallback() -> Self {
        ClauseEntry {
            kind: ClauseKind::Fallback,
            pattern: Pattern::args(Pattern::Wildcard),
        }
    }

    pub fn kind(&self) -> &ClauseKind {
        &self.kind
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// The clause selected for one call.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub kind: ClauseKind,
    pub bindings: Bindings,
    /// Position of the selected clause in its list, front first.
    pub index: usize,
}

/// Clause lists keyed by identity.
#[derive(Clone, Debug, Default)]
pub struct ClauseRegistry {
    clauses: FxHashMap<String, VecDeque<ClauseEntry>>,
}

impl ClauseRegistry {
    pub fn new() -> Self {
        ClauseRegistry::default()
    }

    /// Insert `entry` ahead of every clause already registered for `identity`.
    pub fn register(&mut self, identity: &str, entry: ClauseEntry) {
        self.clauses
            .entry(identity.to_string())
            .or_insert_with(|| VecDeque::from([ClauseEntry::fallback()]))
            .push_front(entry);
    }

    /// Select the first clause of `identity` whose pattern accepts the call.
    ///
    /// Never reports "no match" for a known identity: the fallback accepts
    /// every call and is returned like any other clause.
    pub fn resolve(
        &self,
        identity: &str,
        positional: &[Value],
        named: &BTreeMap<String, Value>,
    ) -> Result<Resolution, DispatchError> {
        let entries = self
            .clauses
            .get(identity)
            .ok_or_else(|| DispatchError::unknown_function(identity))?;
        let subject = call_subject(positional, named);

        for (index, entry) in entries.iter().enumerate() {
            tracing::trace!(identity, index, pattern = %entry.pattern, "trying clause");
            if let Some(env) = entry.pattern.capture(&subject) {
                tracing::debug!(identity, index, fallback = entry.kind.is_fallback(), "clause resolved");
                return Ok(Resolution {
                    kind: entry.kind.clone(),
                    bindings: Bindings::from(env),
                    index,
                });
            }
        }

        // Unreachable while the fallback stays last; report it as exhaustion.
        Err(DispatchError::non_exhaustive(identity, positional, named))
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.clauses.contains_key(identity)
    }

    /// Number of clauses for `identity`, fallback included.
    pub fn clause_count(&self, identity: &str) -> usize {
        self.clauses.get(identity).map_or(0, VecDeque::len)
    }

    /// Registered identities, in no particular order.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.clauses.keys().map(String::as_str)
    }

    /// Clauses of `identity` in resolution order.
    pub fn clauses(&self, identity: &str) -> impl Iterator<Item = &ClauseEntry> {
        self.clauses.get(identity).into_iter().flatten()
    }
}
