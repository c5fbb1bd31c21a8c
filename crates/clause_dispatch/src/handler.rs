//! The callable half of a clause.

use crate::bindings::Bindings;
use crate::error::DispatchResult;

/// Body of a clause, run with the bindings of its matched pattern.
///
/// Any closure `Fn(&Bindings) -> DispatchResult` is a handler.
pub trait ClauseHandler: Send + Sync {
    fn call(&self, bindings: &Bindings) -> DispatchResult;
}

impl<F> ClauseHandler for F
where
    F: Fn(&Bindings) -> DispatchResult + Send + Sync,
{
    fn call(&self, bindings: &Bindings) -> DispatchResult {
        self(bindings)
    }
}
