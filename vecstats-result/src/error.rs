use std::fmt;
use thiserror::Error;

/// Unified error type for all vecstats operations.
///
/// Every failure raised while folding or finalizing a statistics vector is
/// fatal to the aggregation group it occurred in. Nothing here is retried or
/// downgraded to a partial result; callers are expected to abort the
/// surrounding computation and surface the message.
///
/// # Error Handling Strategy
///
/// Errors propagate upward through the call stack using Rust's `?` operator.
/// The host decides how to present them; internal code can match on specific
/// variants when it needs to distinguish a data-contract violation from a
/// misconfigured driver.
#[derive(Error, Debug)]
pub enum Error {
    /// Arrow library error while assembling input or output batches.
    ///
    /// This occurs when building the output `RecordBatch` of a grouped stream
    /// or when an Arrow kernel rejects the data handed to it.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Invalid user input or API parameter.
    ///
    /// Raised for configuration that cannot be parsed or is internally
    /// inconsistent, and for drivers pointed at columns that do not exist or
    /// do not hold vectors.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// An entry point was invoked outside a valid aggregation context.
    ///
    /// This covers both a scalar (non-aggregate) call and a running state that
    /// is presented to a group other than the one that created it.
    #[error("{0}")]
    ContextError(String),

    /// The input's element kind is not one of the supported numeric kinds, or
    /// differs from the kind established by the first input of the group.
    #[error("type error: {0}")]
    TypeError(String),

    /// The input is not a flat one-dimensional vector.
    #[error("shape error: {0}")]
    ShapeError(String),

    /// The input length is not the fixed statistics width, or differs from the
    /// length established by the first input of the group.
    #[error("length error: {0}")]
    LengthError(String),

    /// A fold or finalize arm met an element kind it was not built to handle.
    ///
    /// Type validation should make this unreachable; it exists so that a
    /// mismatch between the declared kind and the physical storage of a
    /// vector is reported instead of misread.
    #[error("unsupported element kind: {0}")]
    UnsupportedKind(String),

    /// A running sum or count left the range of the element kind.
    #[error("numeric overflow: {0}")]
    Overflow(String),

    /// Internal error indicating a bug or unexpected state.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create a length error describing a mismatch between the established
    /// arity of a running state and a newly observed input.
    ///
    /// # Examples
    ///
    /// ```
    /// use vecstats_result::Error;
    ///
    /// let err = Error::length_mismatch(4, 3);
    /// assert!(matches!(err, Error::LengthError(ref msg) if msg.contains("3 vs 4")));
    /// ```
    #[inline]
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Error::LengthError(format!(
            "all arrays must be the same length, but we got {actual} vs {expected}"
        ))
    }

    /// Create an unsupported-kind error from any displayable kind description.
    #[inline]
    pub fn unsupported_kind<K: fmt::Display>(kind: K) -> Self {
        Error::UnsupportedKind(kind.to_string())
    }
}
