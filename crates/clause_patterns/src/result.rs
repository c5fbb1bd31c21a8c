//! Partial match results.
//!
//! Matching never collapses to one boolean. Every pattern returns a flat,
//! non-empty list of [`MatchResult`]s: for compound patterns index 0 is a
//! shape check (kind, arity, minimum length) and the entries after it carry
//! the per-element, per-key and per-field outcomes. A verdict needs the AND
//! of the whole list; see [`all_matched`].

use std::fmt;

use clause_value::Value;

use crate::environment::Environment;
use crate::pattern::Pattern;

/// Results of one `match_value` call, in match order.
pub type MatchResults<'p> = Vec<MatchResult<'p>>;

/// What a single result refers to.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchValue {
    /// The (sub-)subject the source pattern was tested against.
    Subject(Value),
    /// A mapping key the pattern declared but the subject lacks.
    Absent,
    /// Bindings accumulated by an argument group.
    Bindings(Environment),
}

impl MatchValue {
    pub fn as_subject(&self) -> Option<&Value> {
        match self {
            MatchValue::Subject(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bindings(&self) -> Option<&Environment> {
        match self {
            MatchValue::Bindings(env) => Some(env),
            _ => None,
        }
    }
}

impl fmt::Display for MatchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchValue::Subject(v) => write!(f, "{v}"),
            MatchValue::Absent => write!(f, "..."),
            MatchValue::Bindings(env) => write!(f, "{env}"),
        }
    }
}

/// One partial outcome: did `source` accept `value`?
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult<'p> {
    pub matched: bool,
    /// The pattern that produced this result.
    pub source: &'p Pattern,
    pub value: MatchValue,
}

impl<'p> MatchResult<'p> {
    #[inline]
    pub fn new(matched: bool, source: &'p Pattern, value: MatchValue) -> Self {
        MatchResult {
            matched,
            source,
            value,
        }
    }

    #[inline]
    pub(crate) fn subject(matched: bool, source: &'p Pattern, value: &Value) -> Self {
        MatchResult::new(matched, source, MatchValue::Subject(value.clone()))
    }

    /// The variable name bound by this result, if its source is a `Var`.
    pub fn binding_name(&self) -> Option<&'p str> {
        match self.source {
            Pattern::Var(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.matched { "=" } else { "/=" };
        write!(f, "<<{} {op} {}>>", self.source, self.value)
    }
}

/// AND of every result in the list. An empty list never comes out of a
/// matcher and is treated as a failure.
pub fn all_matched(results: &[MatchResult<'_>]) -> bool {
    !results.is_empty() && results.iter().all(|r| r.matched)
}
