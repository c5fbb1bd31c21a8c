//! Clause Patterns - structural pattern matching over runtime values.
//!
//! A [`Pattern`] describes a shape: a literal, a variable to bind, an ordered
//! sequence with head/tail decomposition, a fixed-arity tuple, a keyed
//! mapping, a typed object, or a conjunction over one subject. Matching a
//! [`Value`] against it yields a flat list of partial results rather than a
//! single boolean; an argument group ([`Pattern::Args`]) folds such a list
//! into one verdict plus an [`Environment`] of bindings, rejecting repeated
//! variables that bound unequal values.
//!
//! # Building patterns
//!
//! ```text
//! let p = seq![Pattern::var("head"), .., Pattern::var("rest")]?;
//! let q = tuple![Pattern::var("x"), 1, 2, 3];
//! let r = mapping! { "a" => tuple![false, Pattern::var("y")] };
//! ```
//!
//! Plain literals passed where a pattern is expected are normalized
//! (`Pattern::from`): lists become sequences, tuples tuples, maps mappings.
//!
//! # Tracing
//!
//! [`set_trace`] turns on a before/after `tracing` event for every pattern
//! invocation. It is diagnostic only.

mod environment;
mod error;
mod matching;
mod pattern;
mod result;
mod trace;

pub use clause_value::Value;
pub use environment::Environment;
pub use error::{PatternError, PatternResult};
pub use pattern::{
    call_subject, Element, MappingPattern, ObjectPattern, Pattern, SequencePattern, Tail,
};
pub use result::{all_matched, MatchResult, MatchResults, MatchValue};
pub use trace::{set_trace, trace_enabled};

/// Build a `Sequence` pattern. `..` marks the open tail.
///
/// Returns `PatternResult<Pattern>`.
#[macro_export]
macro_rules! seq {
    ($($item:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::Element> =
            ::std::vec![$($crate::Element::from($item)),*];
        $crate::Pattern::sequence(elements)
    }};
}

/// Build a `Duplicate` pattern. Returns `PatternResult<Pattern>`.
#[macro_export]
macro_rules! dup {
    ($($item:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::Element> =
            ::std::vec![$($crate::Element::from($item)),*];
        $crate::Pattern::duplicate(elements)
    }};
}

/// Build a `Tuple` pattern.
#[macro_export]
macro_rules! tuple {
    ($($item:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::Pattern> =
            ::std::vec![$($crate::Pattern::from($item)),*];
        $crate::Pattern::tuple(elements)
    }};
}

/// Build a `Mapping` pattern from `key => pattern` pairs.
#[macro_export]
macro_rules! mapping {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let entries: ::std::vec::Vec<(::std::string::String, $crate::Pattern)> =
            ::std::vec![$((::std::string::String::from($key), $crate::Pattern::from($value))),*];
        $crate::Pattern::mapping(entries)
    }};
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
