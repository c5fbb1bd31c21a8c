//! Binding environments produced by matching.
//!
//! An `Environment` maps variable names to the values they captured. It is
//! immutable: `join` returns a new environment with the right-hand side's
//! entries laid over a copy of the left.

use rustc_hash::FxHashMap;
use std::fmt;

use clause_value::Value;

/// Immutable variable-name to value mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create an environment with no bindings.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Create an environment holding exactly one binding.
    pub fn single(name: impl Into<String>, value: Value) -> Self {
        let mut bindings = FxHashMap::default();
        bindings.insert(name.into(), value);
        Environment { bindings }
    }

    /// Look up a binding. `None` means the name was never bound.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Overlay `other` onto a copy of `self`. On a shared name, `other` wins.
    #[must_use]
    pub fn join(&self, other: &Environment) -> Environment {
        let mut bindings = self.bindings.clone();
        bindings.extend(
            other
                .bindings
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        Environment { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Project to a plain mapping.
    pub fn to_map(&self) -> FxHashMap<String, Value> {
        self.bindings.clone()
    }

    /// Consume into a plain mapping.
    pub fn into_map(self) -> FxHashMap<String, Value> {
        self.bindings
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Environment {
            bindings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        write!(f, "Env(")?;
        for (i, (name, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, ")")
    }
}
