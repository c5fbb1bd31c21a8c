//! Clause - multi-clause functions dispatched by structural pattern matching.
//!
//! A function is declared as several clauses sharing one identity. Each
//! clause pairs an argument pattern with a handler; a call runs the first
//! clause whose pattern accepts the arguments, handing it the variables the
//! pattern bound. A call no clause accepts fails with
//! [`DispatchError::NonExhaustivePatterns`].
//!
//! ```text
//! let dispatcher = Dispatcher::new();
//! let area = dispatcher.function(identity!("area"));
//! area.clause([Pattern::object("Circle", [("r", Pattern::var("r"))])], NO_NAMED, circle)
//!     .clause([Pattern::object("Rect", [("w", Pattern::var("w")), ("h", Pattern::var("h"))])], NO_NAMED, rect);
//! let a = area.call_positional(&[shape])?;
//! ```
//!
//! This crate re-exports the pieces:
//! - [`Value`] and [`ObjectValue`]: runtime subjects
//! - [`Pattern`], its builders ([`seq!`], [`tuple!`], [`mapping!`], [`dup!`])
//!   and the partial-result types
//! - [`Dispatcher`], [`MatchFn`] and [`Bindings`]: the clause registry
//! - [`Config`] and [`init`]: logging and match tracing

mod config;

pub use clause_dispatch::{
    Bindings, ClauseEntry, ClauseHandler, ClauseKind, ClauseRegistry, DispatchError,
    DispatchResult, Dispatcher, MatchFn, Resolution, SharedMutableRegistry, NO_NAMED,
};
pub use clause_patterns::{
    all_matched, call_subject, dup, mapping, seq, set_trace, trace_enabled, tuple, Element,
    Environment, MappingPattern, MatchResult, MatchResults, MatchValue, ObjectPattern, Pattern,
    PatternError, PatternResult, SequencePattern, Tail,
};
pub use clause_value::{ObjectValue, Value};
pub use config::{init, Config, InitError};

/// A dispatch identity scoped to the calling module: `path::to::module::name`.
///
/// Two functions with the same name in different modules never share
/// clauses.
#[macro_export]
macro_rules! identity {
    ($name:literal) => {
        ::core::concat!(::core::module_path!(), "::", $name)
    };
}
