//! Clause Dispatch - multi-clause functions selected by pattern.
//!
//! Several clauses share one identity. Each clause pairs a handler with an
//! argument pattern; a call matches the clauses front to back and runs the
//! first one that accepts it, passing the pattern's bindings by name. Every
//! identity ends in a permanent fallback, so a call no clause accepts
//! surfaces as [`DispatchError::NonExhaustivePatterns`] rather than a silent
//! miss.
//!
//! The registry is shared behind a reader-writer lock: registration is
//! exclusive, resolution is concurrent, and handlers run outside the lock.

mod bindings;
mod dispatcher;
mod error;
mod handler;
mod registry;
mod shared;

pub use bindings::Bindings;
pub use dispatcher::{Dispatcher, MatchFn, NO_NAMED};
pub use error::{DispatchError, DispatchResult};
pub use handler::ClauseHandler;
pub use registry::{ClauseEntry, ClauseKind, ClauseRegistry, Resolution};
pub use shared::SharedMutableRegistry;
