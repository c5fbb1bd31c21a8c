//! Call-time dispatch errors.

use std::collections::BTreeMap;

use clause_value::Value;
use thiserror::Error;

/// Result of invoking a clause handler.
pub type DispatchResult = Result<Value, DispatchError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No declared clause accepted the call; the permanent fallback did.
    #[error("non-exhaustive patterns: no clause of `{identity}` matches {call}")]
    NonExhaustivePatterns { identity: String, call: String },

    /// The identity has no clause list at all.
    #[error("unknown function `{identity}`")]
    UnknownFunction { identity: String },

    /// A handler asked for a name its pattern does not bind.
    #[error("missing binding `{name}`")]
    MissingBinding { name: String },

    /// Raised by a handler; passed through to the caller unchanged.
    #[error("{message}")]
    Handler { message: String },
}

impl DispatchError {
    /// Error for handlers to raise.
    pub fn handler(message: impl Into<String>) -> Self {
        DispatchError::Handler {
            message: message.into(),
        }
    }

    pub(crate) fn non_exhaustive(
        identity: &str,
        positional: &[Value],
        named: &BTreeMap<String, Value>,
    ) -> Self {
        DispatchError::NonExhaustivePatterns {
            identity: identity.to_string(),
            call: render_call(identity, positional, named),
        }
    }

    pub(crate) fn unknown_function(identity: &str) -> Self {
        DispatchError::UnknownFunction {
            identity: identity.to_string(),
        }
    }
}

/// `identity(p1, p2, k=v)`.
pub(crate) fn render_call(
    identity: &str,
    positional: &[Value],
    named: &BTreeMap<String, Value>,
) -> String {
    let mut out = String::from(identity);
    out.push('(');
    let args = positional
        .iter()
        .map(ToString::to_string)
        .chain(named.iter().map(|(k, v)| format!("{k}={v}")));
    for (i, arg) in args.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&arg);
    }
    out.push(')');
    out
}
