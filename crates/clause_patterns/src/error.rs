//! Construction-time pattern errors.
//!
//! Matching itself never fails: a subject of the wrong kind, arity or type
//! is reported as `matched = false` in the result list. The only error is a
//! malformed pattern caught while it is being built.

use thiserror::Error;

/// Result of building a pattern.
pub type PatternResult<T> = Result<T, PatternError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A sequence-like pattern declared its open tail incorrectly: a second
    /// tail marker, a non-variable after the marker, or more than one
    /// element after it.
    #[error("invalid pattern shape: {reason}")]
    InvalidPatternShape { reason: String },
}

impl PatternError {
    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        PatternError::InvalidPatternShape {
            reason: reason.into(),
        }
    }
}
