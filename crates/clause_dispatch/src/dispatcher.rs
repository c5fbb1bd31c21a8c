//! Dispatch handles.
//!
//! A [`Dispatcher`] owns the shared clause registry. Registration takes the
//! write lock; resolution takes the read lock and releases it before the
//! selected handler runs, so handlers may call back into the dispatcher.

use std::collections::BTreeMap;
use std::sync::Arc;

use clause_patterns::Pattern;
use clause_value::Value;

use crate::error::{DispatchError, DispatchResult};
use crate::handler::ClauseHandler;
use crate::registry::{ClauseEntry, ClauseKind, ClauseRegistry, Resolution};
use crate::shared::SharedMutableRegistry;

/// Named patterns for a clause that declares none.
pub const NO_NAMED: [(&str, Pattern); 0] = [];

/// Cloneable handle to a clause registry.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    registry: SharedMutableRegistry<ClauseRegistry>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher::default()
    }

    /// Add a clause for `identity`, ahead of the ones already there.
    #[tracing::instrument(level = "debug", skip(self, pattern, handler), fields(pattern = %pattern))]
    pub fn register(
        &self,
        identity: &str,
        pattern: Pattern,
        handler: impl ClauseHandler + 'static,
    ) {
        let entry = ClauseEntry::new(pattern, Arc::new(handler));
        self.registry.write().register(identity, entry);
    }

    /// Select the clause a call would run, without running it.
    pub fn resolve(
        &self,
        identity: &str,
        positional: &[Value],
        named: &BTreeMap<String, Value>,
    ) -> Result<Resolution, DispatchError> {
        self.registry.read().resolve(identity, positional, named)
    }

    /// Resolve and run a call.
    ///
    /// The handler sees only the bindings of its pattern. Its result, error
    /// included, is returned unchanged. Selecting the fallback yields
    /// [`DispatchError::NonExhaustivePatterns`].
    #[tracing::instrument(level = "debug", skip(self, positional, named))]
    pub fn invoke(
        &self,
        identity: &str,
        positional: &[Value],
        named: &BTreeMap<String, Value>,
    ) -> DispatchResult {
        let Resolution { kind, bindings, .. } = self.resolve(identity, positional, named)?;
        match kind {
            ClauseKind::User(handler) => handler.call(&bindings),
            ClauseKind::Fallback => {
                tracing::debug!(identity, "no clause matched");
                Err(DispatchError::non_exhaustive(identity, positional, named))
            }
        }
    }

    /// Bind a callable wrapper to `identity`.
    pub fn function(&self, identity: impl Into<String>) -> MatchFn {
        MatchFn {
            identity: identity.into(),
            dispatcher: self.clone(),
        }
    }

    /// Number of clauses for `identity`, fallback included.
    pub fn clause_count(&self, identity: &str) -> usize {
        self.registry.read().clause_count(identity)
    }
}

/// A multi-clause function: one identity, any number of clauses.
///
/// ```text
/// let square = dispatcher.function("demo::square");
/// square.clause([Pattern::var("x")], NO_NAMED, |b: &Bindings| { ... });
/// square.call(&[Value::int(5)], &BTreeMap::new())
/// ```
#[derive(Clone, Debug)]
pub struct MatchFn {
    identity: String,
    dispatcher: Dispatcher,
}

impl MatchFn {
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Add a clause over exactly these positional patterns and named
    /// patterns. See [`Pattern::call`].
    pub fn clause<K: Into<String>>(
        &self,
        positional: impl IntoIterator<Item = Pattern>,
        named: impl IntoIterator<Item = (K, Pattern)>,
        handler: impl ClauseHandler + 'static,
    ) -> &Self {
        self.clause_pattern(Pattern::call(positional, named), handler)
    }

    /// Add a clause selected by an arbitrary pattern over the call subject.
    pub fn clause_pattern(&self, pattern: Pattern, handler: impl ClauseHandler + 'static) -> &Self {
        self.dispatcher.register(&self.identity, pattern, handler);
        self
    }

    pub fn call(&self, positional: &[Value], named: &BTreeMap<String, Value>) -> DispatchResult {
        self.dispatcher.invoke(&self.identity, positional, named)
    }

    /// Call with positional arguments only.
    pub fn call_positional(&self, positional: &[Value]) -> DispatchResult {
        self.call(positional, &BTreeMap::new())
    }
}
