//! Bindings handed to a clause handler.

use std::collections::BTreeMap;

use clause_patterns::Environment;
use clause_value::Value;

use crate::error::DispatchError;

/// Variables bound by the matched clause's pattern, keyed by name.
///
/// The bound names act as the handler's formal parameters; positional
/// arguments are never forwarded positionally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    values: BTreeMap<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Like [`Bindings::get`], but a missing name is an error.
    pub fn require(&self, name: &str) -> Result<&Value, DispatchError> {
        self.values
            .get(name)
            .ok_or_else(|| DispatchError::MissingBinding {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Environment> for Bindings {
    fn from(env: Environment) -> Self {
        Bindings {
            values: env.into_map().into_iter().collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Bindings {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
